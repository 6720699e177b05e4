//! content-service: turns a prompt into a medical marketing content package
//! through an upstream chat-completion API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};

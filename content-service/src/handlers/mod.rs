//! HTTP handlers for the content service.

pub mod content;
pub mod health;

pub use content::{
    generate_content, method_not_allowed, MAX_OUTPUT_TOKENS, SYSTEM_INSTRUCTION, TEMPERATURE,
};
pub use health::{health_check, metrics, readiness_check};

pub mod content_builder;
pub mod metrics;
pub mod providers;

pub use content_builder::{build_response, GenerationStamp};
pub use providers::{GenerationParams, ProviderError, TextProvider};

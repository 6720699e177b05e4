//! Upstream text-generation providers.
//!
//! The handler only sees [`TextProvider`]; production wires in
//! [`openai::OpenAiTextProvider`], tests substitute [`mock::MockTextProvider`].

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// Every variant surfaces to callers as the same INTERNAL_ERROR; the
/// distinction exists for logs and metrics.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("OpenAI API error: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),

    #[error("No content generated")]
    EmptyContent,
}

impl ProviderError {
    /// Stable label for the `upstream_errors_total` metric.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::Status(_) => "status",
            ProviderError::Network(_) => "network",
            ProviderError::InvalidResponse(_) => "invalid_response",
            ProviderError::EmptyContent => "empty_content",
        }
    }
}

/// Result of a completed generation.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text. Never empty.
    pub text: String,

    /// Input tokens consumed, when reported.
    pub input_tokens: u32,

    /// Output tokens generated, when reported.
    pub output_tokens: u32,

    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Unknown,
}

impl FinishReason {
    pub fn from_openai(reason: Option<&str>) -> Self {
        match reason {
            Some("stop") => FinishReason::Complete,
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Complete => "complete",
            FinishReason::Length => "length",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::Unknown => "unknown",
        }
    }
}

/// Sampling parameters for one completion.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    /// Correlation id forwarded to the upstream as `x-request-id`.
    pub request_id: Option<String>,
}

/// A chat-completion backend: one system instruction, one user prompt.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion. An empty completion is an error.
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Model identifier sent upstream.
    fn model(&self) -> &str;

    /// Whether the provider has the credentials it needs. No network call.
    fn is_configured(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_render_the_upstream_status() {
        assert_eq!(ProviderError::Status(503).to_string(), "OpenAI API error: 503");
        assert_eq!(ProviderError::EmptyContent.to_string(), "No content generated");
    }

    #[test]
    fn maps_openai_finish_reasons() {
        assert_eq!(FinishReason::from_openai(Some("stop")), FinishReason::Complete);
        assert_eq!(FinishReason::from_openai(Some("length")), FinishReason::Length);
        assert_eq!(
            FinishReason::from_openai(Some("content_filter")),
            FinishReason::ContentFilter
        );
        assert_eq!(FinishReason::from_openai(None), FinishReason::Unknown);
    }
}

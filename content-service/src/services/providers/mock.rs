//! Scripted provider for tests and local runs without upstream credentials.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

enum Outcome {
    Text(String),
    Status(u16),
    Empty,
}

/// Mock text provider that answers every call the same way and remembers
/// the last prompt it was given.
pub struct MockTextProvider {
    outcome: Outcome,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    /// Always succeed with `text`.
    pub fn returning(text: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Text(text.into()))
    }

    /// Always fail as if the upstream answered with `status`.
    pub fn failing_with_status(status: u16) -> Self {
        Self::with_outcome(Outcome::Status(status))
    }

    /// Always fail as if the upstream produced no text.
    pub fn empty() -> Self {
        Self::with_outcome(Outcome::Empty)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            last_prompt: Mutex::new(None),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _system_instruction: &str,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        match &self.outcome {
            Outcome::Text(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: (prompt.len() / 4) as u32,
                output_tokens: (text.len() / 4) as u32,
                finish_reason: FinishReason::Complete,
            }),
            Outcome::Status(status) => Err(ProviderError::Status(*status)),
            Outcome::Empty => Err(ProviderError::EmptyContent),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

use crate::models::{ErrorCode, ErrorEnvelope};
use crate::services::content_builder::iso_timestamp;
use crate::services::{metrics, ProviderError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use thiserror::Error;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST method allowed";
pub const AUTH_ERROR_MESSAGE: &str = "Invalid API key";
pub const VALIDATION_ERROR_MESSAGE: &str =
    "Missing required fields: prompt, region, ophthalmology_keywords";
pub const INTERNAL_ERROR_MESSAGE: &str = "Content generation failed";

/// Terminal failures of a content generation request.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    /// Carries the reason for logs; callers get the fixed message.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Generation(#[from] ProviderError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ContentError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContentError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ContentError::Unauthorized => StatusCode::UNAUTHORIZED,
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::Generation(_) | ContentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ContentError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            ContentError::Unauthorized => ErrorCode::AuthError,
            ContentError::Validation(_) => ErrorCode::ValidationError,
            ContentError::Generation(_) | ContentError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Label for the `content_requests_total` metric.
    pub fn outcome(&self) -> &'static str {
        match self {
            ContentError::MethodNotAllowed => "method_not_allowed",
            ContentError::Unauthorized => "auth_error",
            ContentError::Validation(_) => "validation_error",
            ContentError::Generation(_) | ContentError::Internal(_) => "internal_error",
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            ContentError::MethodNotAllowed => {
                ErrorEnvelope::new(self.code(), METHOD_NOT_ALLOWED_MESSAGE)
            }
            ContentError::Unauthorized => ErrorEnvelope::new(self.code(), AUTH_ERROR_MESSAGE),
            ContentError::Validation(_) => {
                ErrorEnvelope::new(self.code(), VALIDATION_ERROR_MESSAGE)
            }
            // The underlying error text is returned to the caller as-is.
            ContentError::Generation(_) | ContentError::Internal(_) => {
                ErrorEnvelope::new(self.code(), INTERNAL_ERROR_MESSAGE)
                    .with_details(self.to_string(), iso_timestamp(Utc::now()))
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        metrics::record_request_outcome(self.outcome());
        (self.status(), Json(self.envelope())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_failure_to_status_and_code() {
        let cases = [
            (ContentError::MethodNotAllowed, 405, ErrorCode::MethodNotAllowed),
            (ContentError::Unauthorized, 401, ErrorCode::AuthError),
            (
                ContentError::Validation("prompt: required".to_string()),
                400,
                ErrorCode::ValidationError,
            ),
            (
                ContentError::Generation(ProviderError::Status(502)),
                500,
                ErrorCode::InternalError,
            ),
            (
                ContentError::Internal(anyhow::anyhow!("boom")),
                500,
                ErrorCode::InternalError,
            ),
        ];

        for (error, status, code) in cases {
            assert_eq!(error.status().as_u16(), status);
            assert_eq!(error.code(), code);
        }
    }

    #[test]
    fn validation_detail_is_not_exposed() {
        let envelope = ContentError::Validation("region: region is required".to_string()).envelope();
        assert_eq!(envelope.error.message, VALIDATION_ERROR_MESSAGE);
        assert_eq!(envelope.error.details, None);
        assert_eq!(envelope.error.timestamp, None);
    }

    #[test]
    fn generation_failures_carry_details_and_timestamp() {
        let envelope = ContentError::Generation(ProviderError::Status(500)).envelope();
        assert_eq!(envelope.error.message, INTERNAL_ERROR_MESSAGE);
        assert_eq!(envelope.error.details.as_deref(), Some("OpenAI API error: 500"));
        assert!(envelope.error.timestamp.is_some_and(|t| t.ends_with('Z')));
    }
}

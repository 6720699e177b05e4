use serde::{Deserialize, Serialize};

/// Machine-readable failure class returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MethodNotAllowed,
    AuthError,
    ValidationError,
    InternalError,
}

/// `{ "error": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code,
                message: message.into(),
                details: None,
                timestamp: None,
            },
        }
    }

    pub fn with_details(mut self, details: impl Into<String>, timestamp: impl Into<String>) -> Self {
        self.error.details = Some(details.into());
        self.error.timestamp = Some(timestamp.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omits_absent_optional_fields() {
        let envelope = ErrorEnvelope::new(ErrorCode::AuthError, "Invalid API key");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "error": { "code": "AUTH_ERROR", "message": "Invalid API key" } })
        );
    }

    #[test]
    fn internal_errors_carry_details_and_timestamp() {
        let envelope = ErrorEnvelope::new(ErrorCode::InternalError, "Content generation failed")
            .with_details("No content generated", "2024-05-01T09:30:00.000Z");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "Content generation failed",
                    "details": "No content generated",
                    "timestamp": "2024-05-01T09:30:00.000Z"
                }
            })
        );
    }

    #[test]
    fn codes_use_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(ErrorCode::MethodNotAllowed).unwrap(),
            json!("METHOD_NOT_ALLOWED")
        );
        assert_eq!(
            serde_json::to_value(ErrorCode::ValidationError).unwrap(),
            json!("VALIDATION_ERROR")
        );
    }
}

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::{error::ContentError, startup::AppState};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor that admits the request only when `X-API-Key` equals the
/// configured shared secret. Declared before the body extractor so that
/// authentication runs before the payload is read.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

#[async_trait]
impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = ContentError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        if api_key_matches(state.config.auth.api_key.as_ref(), provided) {
            Ok(RequireApiKey)
        } else {
            tracing::warn!(
                key_present = provided.is_some(),
                secret_configured = state.config.auth.api_key.is_some(),
                "Failed API key authentication attempt"
            );
            Err(ContentError::Unauthorized)
        }
    }
}

/// Constant-time comparison of the presented key against the secret.
/// No configured secret means nothing matches.
pub fn api_key_matches(expected: Option<&Secret<String>>, provided: Option<&str>) -> bool {
    let (Some(expected), Some(provided)) = (expected, provided) else {
        return false;
    };

    let expected_bytes = expected.expose_secret().as_bytes();
    let provided_bytes = provided.as_bytes();

    if expected_bytes.len() != provided_bytes.len() {
        return false;
    }

    expected_bytes.ct_eq(provided_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> Secret<String> {
        Secret::new(value.to_string())
    }

    #[test]
    fn matching_key_is_accepted() {
        assert!(api_key_matches(Some(&secret("s3cret")), Some("s3cret")));
    }

    #[test]
    fn wrong_or_missing_key_is_rejected() {
        assert!(!api_key_matches(Some(&secret("s3cret")), Some("s3cres")));
        assert!(!api_key_matches(Some(&secret("s3cret")), Some("s3cret-longer")));
        assert!(!api_key_matches(Some(&secret("s3cret")), Some("")));
        assert!(!api_key_matches(Some(&secret("s3cret")), None));
    }

    #[test]
    fn unconfigured_secret_rejects_everything() {
        assert!(!api_key_matches(None, Some("anything")));
        assert!(!api_key_matches(None, Some("")));
        assert!(!api_key_matches(None, None));
    }
}

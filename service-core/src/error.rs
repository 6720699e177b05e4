use thiserror::Error;

/// Errors raised while configuring and starting a service.
///
/// Request-level failures are modelled by each service's own error type;
/// this one only crosses the `main` boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_become_internal_errors() {
        let err: AppError = std::io::Error::other("address in use").into();
        assert!(matches!(err, AppError::InternalError(_)));
        assert_eq!(err.to_string(), "Internal server error: address in use");
    }

    #[test]
    fn config_errors_keep_their_message() {
        let err: AppError = config::ConfigError::NotFound("port".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}

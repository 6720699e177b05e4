use secrecy::Secret;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_SERVICE_NAME: &str = "content-service";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub auth: AuthConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret expected in `X-API-Key`. `None` rejects every request.
    pub api_key: Option<Secret<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    /// Client-side timeout for the completion call. Unset means the call
    /// may take as long as the upstream does.
    pub timeout_secs: Option<u64>,
}

impl ContentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let environment = match optional_env("ENVIRONMENT").as_deref() {
            None | Some("dev") | Some("test") => Environment::Dev,
            Some("prod") => Environment::Prod,
            Some(other) => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "ENVIRONMENT must be 'dev' or 'prod', got '{}'",
                    other
                )))
            }
        };

        let timeout_secs = optional_env("OPENAI_TIMEOUT_SECONDS")
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "OPENAI_TIMEOUT_SECONDS must be a whole number of seconds: {}",
                        e
                    ))
                })
            })
            .transpose()?;

        Ok(ContentConfig {
            common,
            environment,
            service_name: optional_env("SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            log_level: optional_env("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
            auth: AuthConfig {
                api_key: optional_env("CUSTOM_API_KEY").map(Secret::new),
            },
            openai: OpenAiConfig {
                api_key: optional_env("OPENAI_API_KEY").map(Secret::new),
                base_url: optional_env("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                timeout_secs,
            },
        })
    }

    /// Names of credentials that are not configured. The service still
    /// starts without them: a missing inbound key fails every request with
    /// AUTH_ERROR and a missing upstream key fails generation.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.auth.api_key.is_none() {
            missing.push("CUSTOM_API_KEY");
        }
        if self.openai.api_key.is_none() {
            missing.push("OPENAI_API_KEY");
        }
        missing
    }
}

/// Read an environment variable, treating an empty value as unset.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

use content_service::config::{ContentConfig, Environment};
use content_service::services::metrics;
use content_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ContentConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    metrics::init_metrics().map_err(|e| {
        tracing::error!("Failed to initialize metrics: {}", e);
        AppError::InternalError(anyhow::anyhow!("Metrics initialization error: {}", e))
    })?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        "Starting content service"
    );

    for name in config.missing_credentials() {
        if config.environment == Environment::Prod {
            tracing::error!(variable = name, "Credential not configured");
        } else {
            tracing::warn!(variable = name, "Credential not configured");
        }
    }

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Content service stopped");
    Ok(())
}

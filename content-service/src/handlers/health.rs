use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::metrics as service_metrics;
use crate::startup::AppState;

/// Liveness probe. Never touches the upstream.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": state.config.service_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: ready once the upstream credential is configured.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.text_provider.is_configured() {
        (
            StatusCode::OK,
            Json(json!({ "status": "ready", "model": state.text_provider.model() })),
        )
    } else {
        tracing::warn!("Readiness check failed: upstream provider not configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "reason": "upstream provider not configured" })),
        )
    }
}

/// Prometheus scrape endpoint.
pub async fn metrics() -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        service_metrics::get_metrics(),
    )
}

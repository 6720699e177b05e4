//! Prometheus metrics for content-service.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub static CONTENT_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static UPSTREAM_REQUEST_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static UPSTREAM_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static UPSTREAM_TOKENS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Calling it again is a no-op.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    if REGISTRY.get().is_some() {
        return Ok(());
    }

    let registry = Registry::new();

    // Outcome per gate: ok, method_not_allowed, auth_error, validation_error, internal_error
    let content_requests = IntCounterVec::new(
        Opts::new(
            "content_requests_total",
            "Total content generation requests by outcome",
        ),
        &["outcome"],
    )?;

    let upstream_duration = HistogramVec::new(
        HistogramOpts::new(
            "upstream_request_duration_seconds",
            "Chat-completion API latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["model"],
    )?;

    let upstream_errors = IntCounterVec::new(
        Opts::new("upstream_errors_total", "Total chat-completion API failures"),
        &["error_type"],
    )?;

    let upstream_tokens = IntCounterVec::new(
        Opts::new("upstream_tokens_total", "Tokens reported by the chat-completion API"),
        &["model", "type"], // type: input, output
    )?;

    registry.register(Box::new(content_requests.clone()))?;
    registry.register(Box::new(upstream_duration.clone()))?;
    registry.register(Box::new(upstream_errors.clone()))?;
    registry.register(Box::new(upstream_tokens.clone()))?;

    let _ = REGISTRY.set(registry);
    let _ = CONTENT_REQUESTS_TOTAL.set(content_requests);
    let _ = UPSTREAM_REQUEST_DURATION_SECONDS.set(upstream_duration);
    let _ = UPSTREAM_ERRORS_TOTAL.set(upstream_errors);
    let _ = UPSTREAM_TOKENS_TOTAL.set(upstream_tokens);

    tracing::info!("Prometheus metrics initialized");
    Ok(())
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let metric_families = registry.gather();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

// Helper functions for recording metrics. All are no-ops before init_metrics.

pub fn record_request_outcome(outcome: &str) {
    if let Some(counter) = CONTENT_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

pub fn record_upstream_latency(model: &str, duration_secs: f64) {
    if let Some(histogram) = UPSTREAM_REQUEST_DURATION_SECONDS.get() {
        histogram.with_label_values(&[model]).observe(duration_secs);
    }
}

pub fn record_upstream_error(error_type: &str) {
    if let Some(counter) = UPSTREAM_ERRORS_TOTAL.get() {
        counter.with_label_values(&[error_type]).inc();
    }
}

pub fn record_tokens(model: &str, input_tokens: u32, output_tokens: u32) {
    if let Some(counter) = UPSTREAM_TOKENS_TOTAL.get() {
        counter
            .with_label_values(&[model, "input"])
            .inc_by(u64::from(input_tokens));
        counter
            .with_label_values(&[model, "output"])
            .inc_by(u64::from(output_tokens));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_recorded_outcomes() {
        init_metrics().unwrap();
        init_metrics().unwrap();

        record_request_outcome("auth_error");
        record_upstream_error("status");
        record_tokens("gpt-4-turbo-preview", 12, 34);

        let text = get_metrics();
        assert!(text.contains("content_requests_total{outcome=\"auth_error\"}"));
        assert!(text.contains("upstream_errors_total{error_type=\"status\"}"));
        assert!(text.contains("upstream_tokens_total"));
    }
}

//! `POST /api/generate-content`.
//!
//! Gates run in a fixed order and the first failure decides the response:
//! CORS preflight (answered by the CORS layer), method, API key, payload,
//! upstream call, response assembly.

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    Extension, Json,
};
use service_core::middleware::tracing::RequestId;
use std::time::Instant;

use crate::error::ContentError;
use crate::middleware::RequireApiKey;
use crate::models::{GenerationRequest, GenerationResponse};
use crate::services::{build_response, metrics, GenerationParams, GenerationStamp};
use crate::startup::AppState;

/// Instruction sent as the system message of every completion.
pub const SYSTEM_INSTRUCTION: &str = "너는 20년 경력의 병원 마케팅 총괄 AI 에이전트다. \
한국의 의료법 제56조 2항을 철저히 준수하여 안과 의료 마케팅 콘텐츠를 생성한다. \
응답은 반드시 JSON 형식으로 구조화하여 제공해야 한다.";

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

pub async fn generate_content(
    State(state): State<AppState>,
    _auth: RequireApiKey,
    request_id: Option<Extension<RequestId>>,
    body: Bytes,
) -> Result<Json<GenerationResponse>, ContentError> {
    let request = GenerationRequest::from_body(&body).map_err(|reason| {
        tracing::info!(reason = %reason, "Rejected generation request");
        ContentError::Validation(reason)
    })?;

    tracing::info!(
        region = %request.region,
        keyword_count = request.ophthalmology_keywords.len(),
        prompt_len = request.prompt.len(),
        has_hospital = request.hospital_name().is_some(),
        "Generating content"
    );

    let params = GenerationParams {
        temperature: Some(TEMPERATURE),
        max_tokens: Some(MAX_OUTPUT_TOKENS),
        request_id: request_id.map(|Extension(RequestId(id))| id),
    };

    let provider = &state.text_provider;
    let started = Instant::now();
    let result = provider
        .generate(SYSTEM_INSTRUCTION, &request.prompt, &params)
        .await;
    metrics::record_upstream_latency(provider.model(), started.elapsed().as_secs_f64());

    let generated = result.map_err(|e| {
        metrics::record_upstream_error(e.kind());
        tracing::error!(error = %e, model = provider.model(), "Content generation failed");
        ContentError::from(e)
    })?;

    metrics::record_tokens(
        provider.model(),
        generated.input_tokens,
        generated.output_tokens,
    );

    let response = build_response(&request, &generated.text, GenerationStamp::now());

    tracing::info!(
        request_id = %response.generation_metadata.request_id,
        character_count = response.content_packages[0].metadata.character_count,
        finish_reason = generated.finish_reason.as_str(),
        "Content generated"
    );
    metrics::record_request_outcome("ok");

    Ok(Json(response))
}

/// Fallback for every method on the route other than POST and OPTIONS.
pub async fn method_not_allowed(method: Method) -> ContentError {
    tracing::debug!(method = %method, "Rejected request method");
    ContentError::MethodNotAllowed
}

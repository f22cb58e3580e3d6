//! AI Endpoints
//!
//! Availability check and the two summary generators. Both generators
//! answer `{"summary": ...}` on success and `{"error": ...}` otherwise.

use gloo_net::http::{Request, Response};

use super::{read_json, HttpBackend};
use crate::error::{ApiError, ApiResult};
use crate::models::{Activity, AiStatus, ReviewSummaryRequest, SummaryRequest, SummaryResponse};

pub async fn get_ai_status(backend: &HttpBackend) -> ApiResult<AiStatus> {
    let url = backend.url("/ai-status");
    log::debug!("GET {}", url);
    let response = Request::get(&url).send().await?;
    read_json(response).await
}

pub async fn generate_summary(backend: &HttpBackend, request: &SummaryRequest) -> ApiResult<String> {
    let url = backend.url("/generate-summary");
    log::debug!("POST {} ({})", url, request.title);
    let response = Request::post(&url).json(request)?.send().await?;
    read_summary(response, "Failed to generate summary").await
}

pub async fn generate_review_summary(backend: &HttpBackend, activities: &[Activity]) -> ApiResult<String> {
    let url = backend.url("/generate-review-summary");
    log::debug!("POST {} ({} activities)", url, activities.len());
    let response = Request::post(&url)
        .json(&ReviewSummaryRequest { activities })?
        .send()
        .await?;
    read_summary(response, "Failed to generate summary").await
}

async fn read_summary(response: Response, fallback: &str) -> ApiResult<String> {
    let status = response.status();
    let body: SummaryResponse = read_json(response).await?;
    summary_text(status, body, fallback)
}

/// A 2xx body without a summary is still a failure
pub(crate) fn summary_text(status: u16, body: SummaryResponse, fallback: &str) -> ApiResult<String> {
    match body.summary {
        Some(summary) if !summary.is_empty() => Ok(summary),
        _ => Err(ApiError::status(
            status,
            body.error.unwrap_or_else(|| fallback.to_string()),
        )),
    }
}

//! Backend API Bindings
//!
//! HTTP wrappers for the REST backend, organized by domain, plus the
//! `Backend` trait the UI flows are written against.

mod activity;
mod ai;
mod category;
mod query;
mod stats;

use async_trait::async_trait;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Activity, AiStatus, ErrorBody, NewActivity, Stats, SummaryRequest};

pub use query::ActivityQuery;

/// Remote collaborator used by the UI flows.
///
/// The browser implementation is `HttpBackend`; tests substitute an
/// in-memory double.
#[async_trait(?Send)]
pub trait Backend {
    async fn list_categories(&self) -> ApiResult<Vec<String>>;

    async fn list_activities(&self, query: &ActivityQuery) -> ApiResult<Vec<Activity>>;

    async fn create_activity(&self, activity: &NewActivity) -> ApiResult<()>;

    async fn delete_activity(&self, id: u32) -> ApiResult<()>;

    async fn stats(&self) -> ApiResult<Stats>;

    async fn ai_status(&self) -> ApiResult<AiStatus>;

    async fn generate_summary(&self, request: &SummaryRequest) -> ApiResult<String>;

    async fn generate_review_summary(&self, activities: &[Activity]) -> ApiResult<String>;
}

/// `Backend` over `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    config: AppConfig,
}

impl HttpBackend {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn list_categories(&self) -> ApiResult<Vec<String>> {
        category::list_categories(self).await
    }

    async fn list_activities(&self, query: &ActivityQuery) -> ApiResult<Vec<Activity>> {
        activity::list_activities(self, query).await
    }

    async fn create_activity(&self, new_activity: &NewActivity) -> ApiResult<()> {
        activity::create_activity(self, new_activity).await
    }

    async fn delete_activity(&self, id: u32) -> ApiResult<()> {
        activity::delete_activity(self, id).await
    }

    async fn stats(&self) -> ApiResult<Stats> {
        stats::get_stats(self).await
    }

    async fn ai_status(&self) -> ApiResult<AiStatus> {
        ai::get_ai_status(self).await
    }

    async fn generate_summary(&self, request: &SummaryRequest) -> ApiResult<String> {
        ai::generate_summary(self, request).await
    }

    async fn generate_review_summary(&self, activities: &[Activity]) -> ApiResult<String> {
        ai::generate_review_summary(self, activities).await
    }
}

// ========================
// Response Helpers
// ========================

/// Turn a non-success response into `ApiError::Status`, preferring the
/// server's `{"error": ...}` text over the status line.
async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::status(status, error_message(status, &status_text, &body)))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = ensure_success(response).await?;
    response.json::<T>().await.map_err(ApiError::from)
}

fn error_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if !parsed.error.is_empty() {
            return parsed.error;
        }
    }
    if status_text.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        format!("Request failed: {} {}", status, status_text)
    }
}

//! Stats Endpoint

use gloo_net::http::Request;

use super::{read_json, HttpBackend};
use crate::error::ApiResult;
use crate::models::Stats;

pub async fn get_stats(backend: &HttpBackend) -> ApiResult<Stats> {
    let url = backend.url("/stats");
    log::debug!("GET {}", url);
    let response = Request::get(&url).send().await?;
    read_json(response).await
}

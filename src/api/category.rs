//! Category Endpoints

use gloo_net::http::Request;

use super::{read_json, HttpBackend};
use crate::error::ApiResult;
use crate::models::CategoryList;

pub async fn list_categories(backend: &HttpBackend) -> ApiResult<Vec<String>> {
    let url = backend.url("/categories");
    log::debug!("GET {}", url);
    let response = Request::get(&url).send().await?;
    let list: CategoryList = read_json(response).await?;
    Ok(list.categories)
}

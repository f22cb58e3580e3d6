//! Activity Endpoints

use gloo_net::http::Request;

use super::{ensure_success, read_json, ActivityQuery, HttpBackend};
use crate::error::ApiResult;
use crate::models::{Activity, ActivityList, NewActivity};

pub async fn list_activities(backend: &HttpBackend, query: &ActivityQuery) -> ApiResult<Vec<Activity>> {
    let url = format!("{}{}", backend.url("/activities"), query.to_query_string());
    log::debug!("GET {}", url);
    let response = Request::get(&url).send().await?;
    let list: ActivityList = read_json(response).await?;
    Ok(list.activities)
}

/// Create an activity. The server echoes the stored record, which the
/// client ignores since the list is reloaded afterwards.
pub async fn create_activity(backend: &HttpBackend, activity: &NewActivity) -> ApiResult<()> {
    let url = backend.url("/activities");
    log::debug!("POST {} ({})", url, activity.title);
    let response = Request::post(&url).json(activity)?.send().await?;
    ensure_success(response).await?;
    Ok(())
}

pub async fn delete_activity(backend: &HttpBackend, id: u32) -> ApiResult<()> {
    let url = backend.url(&format!("/activities/{}", id));
    log::debug!("DELETE {}", url);
    let response = Request::delete(&url).send().await?;
    ensure_success(response).await?;
    Ok(())
}

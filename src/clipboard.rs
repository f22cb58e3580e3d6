//! Clipboard Access

use wasm_bindgen_futures::JsFuture;

use crate::error::{ApiError, ApiResult};

/// Write plain text to the system clipboard
pub async fn copy_text(text: &str) -> ApiResult<()> {
    let window = web_sys::window().ok_or_else(|| ApiError::Clipboard("no window".to_string()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ApiError::Clipboard(format!("{:?}", e)))
}

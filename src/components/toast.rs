//! Toast Component

use leptos::prelude::*;

use crate::notify::use_notifications;

/// Fixed-position toast region
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notifications();

    let class = move || {
        notify
            .slot
            .read()
            .current()
            .map(|toast| format!("toast show {}", toast.kind.as_str()))
            .unwrap_or_else(|| "toast".to_string())
    };
    let message = move || {
        notify
            .slot
            .read()
            .current()
            .map(|toast| toast.message.clone())
            .unwrap_or_default()
    };

    view! {
        <div id="toast" class=class role="status" aria-live="polite">{message}</div>
    }
}

//! Activity Card Component
//!
//! Collapsible card for one activity. All fields are rendered as text.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::flows::{self, DeleteOutcome};
use crate::store::UiStateStoreFields;
use crate::view_model::ActivityCardView;

const DELETE_PROMPT: &str = "Are you sure you want to delete this activity?";

#[component]
pub fn ActivityCard(card: ActivityCardView) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let ActivityCardView {
        id,
        title,
        date,
        category,
        description,
        ai_summary,
        tags,
    } = card;

    let expanded = move || store.cards().read().is_expanded(id);

    let on_delete = move |ev: web_sys::MouseEvent| {
        // Keep the click away from the header toggle
        ev.stop_propagation();
        spawn_local(async move {
            match flows::delete_activity(&ctx.backend(), id, confirm_delete).await {
                Ok(DeleteOutcome::Cancelled) => {}
                Ok(DeleteOutcome::Deleted) => {
                    ctx.reload().await;
                    ctx.notify.success("Activity deleted successfully");
                }
                Err(err) => {
                    log::error!("Error deleting activity {}: {}", id, err);
                    ctx.notify.error("Error deleting activity");
                }
            }
        });
    };

    view! {
        <div
            class=move || if expanded() { "activity-card" } else { "activity-card collapsed" }
            data-activity-id=id.to_string()
        >
            <div
                class="activity-header"
                style="cursor: pointer;"
                on:click=move |_| store.cards().write().toggle(id)
            >
                <div class="activity-heading">
                    <span class="collapse-icon">{move || if expanded() { "▼" } else { "▶" }}</span>
                    <div class="activity-title">{title}</div>
                </div>
                <div class="activity-date">{date}</div>
            </div>
            <div class="activity-category">{category}</div>
            <div class="activity-content" style:display=move || if expanded() { "block" } else { "none" }>
                {description.map(|text| view! { <div class="activity-description">{text}</div> })}
                {ai_summary.map(|text| view! {
                    <div class="activity-ai-summary">
                        <div class="impact-label">"🤖 AI Summary:"</div>
                        <div>{text}</div>
                    </div>
                })}
                {(!tags.is_empty()).then(|| view! {
                    <div class="activity-tags">
                        {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
                    </div>
                })}
                <div class="activity-actions">
                    <button class="btn btn-danger" type="button" on:click=on_delete>"Delete"</button>
                </div>
            </div>
        </div>
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(DELETE_PROMPT).ok())
        .unwrap_or(false)
}

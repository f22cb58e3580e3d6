//! Performance Review Panel Component
//!
//! Aggregate summary over every activity that already has an AI summary.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard;
use crate::components::CollapsibleSection;
use crate::context::use_app_context;
use crate::flows::{self, ReviewOutcome};
use crate::store::{Section, UiStateStoreFields};

#[component]
pub fn ReviewPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (summary, set_summary) = signal::<Option<String>>(None);
    let (generating, set_generating) = signal(false);

    let on_generate = move |_| {
        set_generating.set(true);
        spawn_local(async move {
            let result = flows::generate_review(&ctx.backend()).await;
            match &result {
                Ok(ReviewOutcome::Generated(text)) => {
                    set_summary.set(Some(text.clone()));
                    ctx.store.sections().write().expand(Section::Review);
                }
                Ok(ReviewOutcome::Rejected(message)) => {
                    log::error!("Review summary rejected: {}", message);
                }
                Ok(ReviewOutcome::NothingToSummarize) => {}
                Err(err) => log::error!("Error generating review summary: {}", err),
            }
            ctx.notify.notify(flows::review_notice(&result));
            set_generating.set(false);
        });
    };

    let on_copy = move |_| {
        let text = summary.get_untracked().unwrap_or_default();
        spawn_local(async move {
            match clipboard::copy_text(&text).await {
                Ok(()) => ctx.notify.success("Copied to clipboard!"),
                Err(err) => {
                    log::error!("Failed to copy: {}", err);
                    ctx.notify.error("Failed to copy to clipboard");
                }
            }
        });
    };

    view! {
        <CollapsibleSection section=Section::Review title="Performance Review" class="performance-review-section">
            <div id="performance-review-content">
                <button
                    id="generate-review-summary-btn"
                    type="button"
                    class="btn btn-primary"
                    prop:disabled=move || generating.get()
                    on:click=on_generate
                >
                    {move || if generating.get() { "🔄 Generating..." } else { "🤖 Generate Performance Review Summary" }}
                </button>
                <div
                    id="review-summary-section"
                    style:display=move || if summary.with(Option::is_some) { "block" } else { "none" }
                >
                    <div id="review-summary-content" class="review-summary-content">
                        <pre>{move || summary.get().unwrap_or_default()}</pre>
                    </div>
                    <button id="copy-review-btn" type="button" class="btn btn-secondary" on:click=on_copy>
                        "📋 Copy to Clipboard"
                    </button>
                </div>
            </div>
        </CollapsibleSection>
    }
}

//! Activity Form Component
//!
//! Create-activity form with the per-activity AI summary panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CategoryOptions;
use crate::context::use_app_context;
use crate::flows;
use crate::form::{self, ActivityDraft, SummaryPanel};

const AI_UNAVAILABLE_HELP: &str =
    "The AI service is not running. Start it to enable AI summaries.";

/// Form for logging a new activity
#[component]
pub fn ActivityForm() -> impl IntoView {
    let ctx = use_app_context();
    let notify = ctx.notify;

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (date, set_date) = signal(form::today());
    let (panel, set_panel) = signal(SummaryPanel::Hidden);
    let (submitting, set_submitting) = signal(false);

    let draft = move || ActivityDraft {
        title: title.get_untracked(),
        description: description.get_untracked(),
        category: category.get_untracked(),
        tags: tags.get_untracked(),
        date: date.get_untracked(),
    };

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_category.set(String::new());
        set_tags.set(String::new());
        set_date.set(form::today());
        set_panel.set(SummaryPanel::Hidden);
        ctx.discard_pending_summary();
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = draft();
        let ai_summary = panel.with_untracked(|p| p.generated_summary().map(str::to_string));
        set_submitting.set(true);

        spawn_local(async move {
            let today = form::today();
            match flows::submit_activity(&ctx.backend(), &draft, ai_summary.as_deref(), &today).await {
                Ok(()) => {
                    reset();
                    ctx.reload().await;
                    notify.success("Activity added successfully! 🎉");
                }
                Err(err) => {
                    // Form contents are kept so the user can retry
                    log::error!("Error adding activity: {}", err);
                    notify.error("Error adding activity");
                }
            }
            set_submitting.set(false);
        });
    };

    let on_generate = move |_| {
        let request = match draft().summary_request() {
            Ok(request) => request,
            Err(err) => {
                notify.error(err.to_string());
                return;
            }
        };
        set_panel.set(SummaryPanel::Loading);

        spawn_local(async move {
            // Superseded by a newer request or a form reset
            let Some(result) = ctx.summarize(&request).await else {
                return;
            };
            if let Err(err) = &result {
                log::error!("Error generating summary: {}", err);
            }
            let (next, notice) = SummaryPanel::settle(result);
            set_panel.set(next);
            notify.notify(notice);
        });
    };

    let ai_unavailable = move || ctx.ai_status.get().is_some_and(|status| !status.enabled);
    let summarizing = move || panel.with(SummaryPanel::is_busy);
    let generate_label = move || {
        if ai_unavailable() {
            "🤖 AI Not Available"
        } else if summarizing() {
            "⏳ Generating..."
        } else {
            "🤖 Generate AI Summary"
        }
    };
    let ai_help = move || {
        ctx.ai_status.get().map(|status| {
            if status.enabled {
                format!("Powered by {}", status.model)
            } else {
                AI_UNAVAILABLE_HELP.to_string()
            }
        })
    };

    view! {
        <section class="form-section">
            <h2>"Add Activity"</h2>
            <form id="activity-form" class="activity-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        name="title"
                        type="text"
                        required
                        placeholder="What did you do?"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        name="category"
                        required
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="" disabled>"Select a category"</option>
                        <CategoryOptions />
                    </select>
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        rows="4"
                        placeholder="Describe the activity and its impact"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group ai-group">
                    <button
                        id="generate-summary-btn"
                        type="button"
                        class="btn btn-secondary"
                        prop:disabled=move || summarizing() || ai_unavailable()
                        on:click=on_generate
                    >
                        {generate_label}
                    </button>
                    {move || ai_help().map(|text| view! { <p class="ai-help">{text}</p> })}
                </div>

                <div
                    id="ai-summary-section"
                    class="ai-summary-section"
                    style:display=move || if panel.with(SummaryPanel::is_visible) { "block" } else { "none" }
                >
                    <div class="impact-label">"🤖 AI Summary:"</div>
                    <div id="ai-summary" class=move || panel.with(SummaryPanel::css_class)>
                        {move || panel.with(SummaryPanel::text)}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tags">"Tags"</label>
                        <input
                            id="tags"
                            name="tags"
                            type="text"
                            placeholder="azure, ai, community"
                            prop:value=move || tags.get()
                            on:input=move |ev| set_tags.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="date">"Date"</label>
                        <input
                            id="date"
                            name="date"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <button type="submit" class="btn btn-primary" prop:disabled=move || submitting.get()>
                    "Add Activity"
                </button>
            </form>
        </section>
    }
}

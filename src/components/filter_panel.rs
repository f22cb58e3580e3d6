//! Filter Panel Component
//!
//! Category filter applied server-side; every change refetches the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CategoryOptions, CollapsibleSection};
use crate::context::use_app_context;
use crate::store::{Section, UiStateStoreFields};

#[component]
pub fn FilterPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        spawn_local(async move {
            ctx.set_filter(&value).await;
        });
    };

    let on_clear = move |_| {
        spawn_local(async move {
            ctx.clear_filter().await;
        });
    };

    view! {
        <CollapsibleSection section=Section::Filter title="Filter Activities" class="filter-section">
            <div id="filter-content" class="filter-row">
                <label for="filter-category">"Category"</label>
                <select
                    id="filter-category"
                    prop:value=move || store.filter().read().select_value()
                    on:change=on_change
                >
                    <option value="">"All categories"</option>
                    <CategoryOptions />
                </select>
                <button id="clear-filters" type="button" class="btn btn-secondary" on:click=on_clear>
                    "Clear Filters"
                </button>
            </div>
        </CollapsibleSection>
    }
}

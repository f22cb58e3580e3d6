//! Category Options
//!
//! `<option>` list rendered from the shared category signal, so every select
//! using it offers the same set.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn CategoryOptions() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <For
            each=move || ctx.categories.get()
            key=|category| category.clone()
            children=|category| {
                let value = category.clone();
                view! { <option value=value>{category}</option> }
            }
        />
    }
}

//! Collapsible Section Component
//!
//! Page section whose body is shown or hidden by clicking its header.

use leptos::prelude::*;

use crate::store::{use_app_store, Section, UiStateStoreFields};

/// Section with a clickable header.
///
/// The body stays mounted while collapsed so form state survives toggling.
#[component]
pub fn CollapsibleSection(
    section: Section,
    #[prop(into)] title: String,
    #[prop(into)] class: String,
    /// Extra header text, e.g. a count
    #[prop(optional, into)]
    badge: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let store = use_app_store();
    let expanded = move || store.sections().read().is_expanded(section);

    view! {
        <section class=class>
            <div
                class="section-header"
                style="cursor: pointer;"
                on:click=move |_| store.sections().write().toggle(section)
            >
                <span class="collapse-icon">{move || if expanded() { "▼" } else { "▶" }}</span>
                <h2>{title}</h2>
                {badge.map(|badge| view! { <span class="section-badge">{move || badge.get()}</span> })}
            </div>
            <div class="section-content" style:display=move || if expanded() { "block" } else { "none" }>
                {children()}
            </div>
        </section>
    }
}

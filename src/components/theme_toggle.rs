//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, UiStateStoreFields};
use crate::theme::{self, LocalStorage};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_toggle = move |_| {
        let key = ctx.config.with_value(|c| c.theme_storage_key.clone());
        let next = theme::toggle_theme(*store.theme().read_untracked(), &LocalStorage, &key);
        log::debug!("Theme switched to {}", next.as_str());
        *store.theme().write() = next;
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" type="button" on:click=on_toggle>
            {move || store.theme().read().toggle_label()}
        </button>
    }
}

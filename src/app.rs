//! Activity Tracker Frontend App
//!
//! Single-page layout: stats, entry form, filter, list and review panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    ActivityForm, ActivityList, FilterPanel, ReviewPanel, StatsPanel, ThemeToggle, ToastHost,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify::provide_notification_state;
use crate::store::{UiState, UiStateStoreFields};
use crate::theme::{self, LocalStorage};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let saved_theme = theme::load_theme(&LocalStorage, &config.theme_storage_key);

    // Provide state to all children
    let store = Store::new(UiState::new(saved_theme));
    provide_context(store);
    let notify = provide_notification_state(config.toast_duration_ms);
    let ctx = AppContext::new(config, store, notify);
    provide_context(ctx);

    // Body class follows the theme
    Effect::new(move |_| {
        theme::apply_to_body(*store.theme().read());
    });

    // Initial load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            ctx.bootstrap().await;
        });
    });

    view! {
        <div class="container">
            <header class="app-header">
                <div>
                    <h1>"📊 Activity Impact Tracker"</h1>
                    <p class="subtitle">"Log what you do, keep the impact for review time"</p>
                </div>
                <ThemeToggle />
            </header>

            <StatsPanel />
            <ActivityForm />
            <FilterPanel />
            <ActivityList />
            <ReviewPanel />
        </div>
        <ToastHost />
    }
}

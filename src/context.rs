//! Application Context
//!
//! Server data signals and the loaders that fill them, provided via the
//! Leptos Context API.

use leptos::prelude::*;

use crate::api::{Backend, HttpBackend};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{Activity, AiStatus, Stats, SummaryRequest};
use crate::notify::NotificationState;
use crate::store::{AppStore, UiStateStoreFields};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    backend: StoredValue<HttpBackend>,
    pub store: AppStore,
    pub notify: NotificationState,
    /// Category set shared by the form and filter controls
    pub categories: RwSignal<Vec<String>>,
    /// Activities as last returned by the server
    pub activities: RwSignal<Vec<Activity>>,
    pub stats: RwSignal<Option<Stats>>,
    /// `None` until the availability check has answered
    pub ai_status: RwSignal<Option<AiStatus>>,
}

impl AppContext {
    pub fn new(config: AppConfig, store: AppStore, notify: NotificationState) -> Self {
        Self {
            backend: StoredValue::new(HttpBackend::new(config.clone())),
            config: StoredValue::new(config),
            store,
            notify,
            categories: RwSignal::new(Vec::new()),
            activities: RwSignal::new(Vec::new()),
            stats: RwSignal::new(None),
            ai_status: RwSignal::new(None),
        }
    }

    pub fn backend(&self) -> HttpBackend {
        self.backend.get_value()
    }

    pub async fn bootstrap(&self) {
        self.bootstrap_with(&self.backend()).await;
    }

    /// Initial load. Steps run in order and a failing step does not stop
    /// the ones after it.
    pub async fn bootstrap_with<B: Backend + ?Sized>(&self, backend: &B) {
        log::info!("Bootstrapping activity tracker");
        self.load_categories_with(backend).await;
        self.load_activities_with(backend).await;
        self.load_stats_with(backend).await;
        self.check_ai_status_with(backend).await;
    }

    pub async fn load_categories_with<B: Backend + ?Sized>(&self, backend: &B) {
        match backend.list_categories().await {
            Ok(categories) => {
                log::debug!("Loaded {} categories", categories.len());
                self.categories.set(categories);
            }
            Err(err) => {
                log::error!("Error loading categories: {}", err);
                self.notify.error("Error loading categories");
            }
        }
    }

    pub async fn load_activities(&self) {
        self.load_activities_with(&self.backend()).await;
    }

    /// Fetch the list for the current filter. Responses to superseded
    /// requests are dropped.
    pub async fn load_activities_with<B: Backend + ?Sized>(&self, backend: &B) {
        let query = self.store.filter().read_untracked().query();
        let generation = self.store.list_requests().write().begin();

        let result = backend.list_activities(&query).await;
        if !self.store.list_requests().read_untracked().is_current(generation) {
            log::debug!("Dropping stale activity list (generation {})", generation);
            return;
        }

        match result {
            Ok(activities) => {
                log::debug!("Loaded {} activities", activities.len());
                self.store.cards().write().collapse_all();
                self.activities.set(activities);
            }
            Err(err) => {
                log::error!("Error loading activities: {}", err);
                self.notify.error("Error loading activities");
            }
        }
    }

    pub async fn load_stats_with<B: Backend + ?Sized>(&self, backend: &B) {
        match backend.stats().await {
            Ok(stats) => self.stats.set(Some(stats)),
            Err(err) => log::error!("Error loading stats: {}", err),
        }
    }

    pub async fn check_ai_status_with<B: Backend + ?Sized>(&self, backend: &B) {
        match backend.ai_status().await {
            Ok(status) => {
                log::info!("AI enabled: {} ({})", status.enabled, status.model);
                self.ai_status.set(Some(status));
            }
            Err(err) => log::error!("Error checking AI status: {}", err),
        }
    }

    pub async fn reload(&self) {
        self.reload_with(&self.backend()).await;
    }

    /// Refresh list then stats after a create or delete
    pub async fn reload_with<B: Backend + ?Sized>(&self, backend: &B) {
        self.load_activities_with(backend).await;
        self.load_stats_with(backend).await;
    }

    pub async fn set_filter(&self, category: &str) {
        self.set_filter_with(&self.backend(), category).await;
    }

    /// Select a category ("" means all) and refetch
    pub async fn set_filter_with<B: Backend + ?Sized>(&self, backend: &B, category: &str) {
        self.store.filter().write().set(category);
        self.load_activities_with(backend).await;
    }

    pub async fn clear_filter(&self) {
        self.clear_filter_with(&self.backend()).await;
    }

    pub async fn clear_filter_with<B: Backend + ?Sized>(&self, backend: &B) {
        self.store.filter().write().clear();
        self.load_activities_with(backend).await;
    }

    pub async fn summarize(&self, request: &SummaryRequest) -> Option<ApiResult<String>> {
        self.summarize_with(&self.backend(), request).await
    }

    /// Request a per-activity summary. `None` means the answer arrived after
    /// a newer request or a form reset and must be ignored.
    pub async fn summarize_with<B: Backend + ?Sized>(
        &self,
        backend: &B,
        request: &SummaryRequest,
    ) -> Option<ApiResult<String>> {
        let generation = self.store.summary_requests().write().begin();
        let result = backend.generate_summary(request).await;
        if self.store.summary_requests().read_untracked().is_current(generation) {
            Some(result)
        } else {
            log::debug!("Dropping stale summary (generation {})", generation);
            None
        }
    }

    /// Invalidate any summary request still in flight
    pub fn discard_pending_summary(&self) {
        self.store.summary_requests().write().begin();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ActivityQuery;
    use crate::error::ApiError;
    use crate::flows::testing::{Call, MockBackend};
    use crate::notify::{Toast, ToastKind};
    use crate::store::UiState;
    use futures::executor::block_on;
    use reactive_stores::Store;

    fn make_context() -> AppContext {
        let config = AppConfig::default();
        let notify = NotificationState::new(config.toast_duration_ms);
        AppContext::new(config, Store::new(UiState::default()), notify)
    }

    fn make_activity(id: u32, category: &str) -> Activity {
        Activity {
            id,
            title: format!("Activity {}", id),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn current_toast(ctx: &AppContext) -> Option<Toast> {
        ctx.notify.slot.get_untracked().current().cloned()
    }

    fn summary_request() -> SummaryRequest {
        SummaryRequest {
            title: "Talk".into(),
            description: "Spoke at a meetup".into(),
            category: "Speaking".into(),
            tags: "rust".into(),
        }
    }

    #[test]
    fn test_bootstrap_runs_steps_in_order() {
        let ctx = make_context();
        let backend = MockBackend::with_activities(vec![make_activity(1, "Fitness")]);

        block_on(ctx.bootstrap_with(&backend));

        assert_eq!(
            backend.calls(),
            vec![
                Call::ListCategories,
                Call::ListActivities(ActivityQuery::all()),
                Call::Stats,
                Call::AiStatus,
            ]
        );
        assert_eq!(ctx.categories.get_untracked().len(), 2);
        assert_eq!(ctx.activities.get_untracked().len(), 1);
        assert!(ctx.stats.get_untracked().is_some());
        assert!(ctx.ai_status.get_untracked().is_some_and(|s| s.enabled));
        assert_eq!(current_toast(&ctx), None);
    }

    #[test]
    fn test_failed_categories_do_not_stop_bootstrap() {
        let ctx = make_context();
        let backend = MockBackend::failing_on(ApiError::Network("offline".into()), |call| {
            matches!(call, Call::ListCategories)
        });
        backend.activities.borrow_mut().push(make_activity(1, "Fitness"));

        block_on(ctx.bootstrap_with(&backend));

        assert_eq!(backend.calls().len(), 4);
        assert!(ctx.categories.get_untracked().is_empty());
        assert_eq!(ctx.activities.get_untracked().len(), 1);
        let toast = current_toast(&ctx).unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Error loading categories");
    }

    #[test]
    fn test_failed_stats_are_logged_without_toast() {
        let ctx = make_context();
        let backend = MockBackend::failing_on(ApiError::status(500, "boom"), |call| {
            matches!(call, Call::Stats)
        });

        block_on(ctx.bootstrap_with(&backend));

        assert_eq!(backend.calls().last(), Some(&Call::AiStatus));
        assert!(ctx.stats.get_untracked().is_none());
        assert!(ctx.ai_status.get_untracked().is_some());
        assert_eq!(current_toast(&ctx), None);
    }

    #[test]
    fn test_failed_list_keeps_previous_activities() {
        let ctx = make_context();
        ctx.activities.set(vec![make_activity(9, "Fitness")]);
        let backend = MockBackend::failing(ApiError::status(500, "Failed to load"));

        block_on(ctx.load_activities_with(&backend));

        assert_eq!(ctx.activities.get_untracked().len(), 1);
        assert_eq!(
            current_toast(&ctx).map(|t| t.message),
            Some("Error loading activities".to_string())
        );
    }

    #[test]
    fn test_set_and_clear_filter_refetch() {
        let ctx = make_context();
        let backend = MockBackend::with_activities(vec![
            make_activity(1, "Fitness"),
            make_activity(2, "Mentoring"),
        ]);

        block_on(ctx.set_filter_with(&backend, "Mentoring"));
        let ids: Vec<u32> = ctx.activities.get_untracked().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);

        block_on(ctx.clear_filter_with(&backend));
        assert_eq!(ctx.activities.get_untracked().len(), 2);
        assert_eq!(ctx.store.filter().read_untracked().selected(), None);

        assert_eq!(
            backend.calls(),
            vec![
                Call::ListActivities(ActivityQuery::by_category("Mentoring")),
                Call::ListActivities(ActivityQuery::all()),
            ]
        );
    }

    #[test]
    fn test_reload_collapses_expanded_cards() {
        let ctx = make_context();
        let backend = MockBackend::with_activities(vec![
            make_activity(1, "Fitness"),
            make_activity(2, "Fitness"),
        ]);
        block_on(ctx.load_activities_with(&backend));
        ctx.store.cards().write().toggle(1);

        block_on(ctx.reload_with(&backend));

        assert!(!ctx.store.cards().read_untracked().is_expanded(1));
    }

    #[test]
    fn test_superseded_list_response_is_dropped() {
        let ctx = make_context();
        ctx.activities.set(vec![make_activity(9, "Fitness")]);
        let backend = MockBackend::with_activities(vec![make_activity(1, "Fitness")]);
        // A newer load starts while this one is in flight
        backend.on_call(move |call| {
            if matches!(call, Call::ListActivities(_)) {
                ctx.store.list_requests().write().begin();
            }
        });

        block_on(ctx.load_activities_with(&backend));

        let ids: Vec<u32> = ctx.activities.get_untracked().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![9]);
    }

    #[test]
    fn test_summary_is_returned_when_current() {
        let ctx = make_context();
        let backend = MockBackend::default();

        let result = block_on(ctx.summarize_with(&backend, &summary_request()));

        assert_eq!(result, Some(Ok("Summary of Talk".to_string())));
    }

    #[test]
    fn test_summary_discarded_by_form_reset() {
        let ctx = make_context();
        let backend = MockBackend::default();
        // The form is reset while the summary is in flight
        backend.on_call(move |call| {
            if matches!(call, Call::Summary(_)) {
                ctx.discard_pending_summary();
            }
        });

        let result = block_on(ctx.summarize_with(&backend, &summary_request()));

        assert_eq!(result, None);
    }
}

//! Activity List Component

use leptos::prelude::*;

use crate::components::{ActivityCard, CollapsibleSection};
use crate::context::use_app_context;
use crate::store::Section;
use crate::view_model::ActivityListView;

/// Rebuilds every card whenever the list signal changes
#[component]
pub fn ActivityList() -> impl IntoView {
    let ctx = use_app_context();

    let count = Signal::derive(move || {
        let n = ctx.activities.read().len();
        if n == 1 {
            "1 activity".to_string()
        } else {
            format!("{} activities", n)
        }
    });

    view! {
        <CollapsibleSection section=Section::ActivityList title="Activities" class="activities-section" badge=count>
            <div id="all-activities" class="activity-list">
                {move || match ActivityListView::build(&ctx.activities.read()) {
                    ActivityListView::Empty(message) => {
                        view! { <div class="empty-message">{message}</div> }.into_any()
                    }
                    ActivityListView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <ActivityCard card=card /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </CollapsibleSection>
    }
}

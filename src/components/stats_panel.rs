//! Stats Panel Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Totals plus the per-category breakdown
#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_app_context();

    let total = move || ctx.stats.get().map(|s| s.total_activities).unwrap_or(0);
    let categories_used = move || ctx.stats.get().map(|s| s.categories_used).unwrap_or(0);
    let distribution = move || {
        ctx.stats
            .get()
            .map(|s| s.category_distribution.into_iter().collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <section class="stats-panel">
            <div class="stat">
                <span class="stat-value" id="total-activities">{total}</span>
                <span class="stat-label">"Activities"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="total-categories">{categories_used}</span>
                <span class="stat-label">"Categories used"</span>
            </div>
            <ul class="category-distribution">
                <For
                    each=distribution
                    key=|(category, count)| (category.clone(), *count)
                    children=|(category, count)| view! {
                        <li><span class="category-name">{category}</span>" "<span class="category-count">{count}</span></li>
                    }
                />
            </ul>
        </section>
    }
}

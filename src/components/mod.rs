//! UI Components
//!
//! Leptos components making up the single page.

mod activity_card;
mod activity_form;
mod activity_list;
mod category_options;
mod filter_panel;
mod review_panel;
mod section;
mod stats_panel;
mod theme_toggle;
mod toast;

pub use activity_card::ActivityCard;
pub use activity_form::ActivityForm;
pub use activity_list::ActivityList;
pub use category_options::CategoryOptions;
pub use filter_panel::FilterPanel;
pub use review_panel::ReviewPanel;
pub use section::CollapsibleSection;
pub use stats_panel::StatsPanel;
pub use theme_toggle::ThemeToggle;
pub use toast::ToastHost;

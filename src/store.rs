//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The field types
//! are plain structs so their behavior can be tested without a DOM.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ActivityQuery;
use crate::theme::Theme;

/// Collapsible page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Filter,
    ActivityList,
    Review,
}

/// Expanded/collapsed flags of the page sections (all start expanded)
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    filter: bool,
    activity_list: bool,
    review: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            filter: true,
            activity_list: true,
            review: true,
        }
    }
}

impl Sections {
    pub fn is_expanded(&self, section: Section) -> bool {
        *self.flag(section)
    }

    pub fn toggle(&mut self, section: Section) {
        let flag = self.flag_mut(section);
        *flag = !*flag;
    }

    pub fn expand(&mut self, section: Section) {
        *self.flag_mut(section) = true;
    }

    fn flag(&self, section: Section) -> &bool {
        match section {
            Section::Filter => &self.filter,
            Section::ActivityList => &self.activity_list,
            Section::Review => &self.review,
        }
    }

    fn flag_mut(&mut self, section: Section) -> &mut bool {
        match section {
            Section::Filter => &mut self.filter,
            Section::ActivityList => &mut self.activity_list,
            Section::Review => &mut self.review,
        }
    }
}

/// Ids of the activity cards currently expanded (cards start collapsed)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandedCards(HashSet<u32>);

impl ExpandedCards {
    pub fn is_expanded(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn toggle(&mut self, id: u32) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    /// A replaced list renders every card collapsed again
    pub fn collapse_all(&mut self) {
        self.0.clear();
    }
}

/// Selected category filter; `None` means all categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter(Option<String>);

impl CategoryFilter {
    /// Select a category; the empty "All categories" option clears the filter
    pub fn set(&mut self, category: &str) {
        self.0 = if category.is_empty() {
            None
        } else {
            Some(category.to_string())
        };
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Value for the `<select>` control
    pub fn select_value(&self) -> String {
        self.0.clone().unwrap_or_default()
    }

    pub fn query(&self) -> ActivityQuery {
        ActivityQuery {
            category: self.0.clone(),
            circle: None,
        }
    }
}

/// Monotonic counter for one request slot. A response is applied only if it
/// belongs to the latest request issued for that slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub theme: Theme,
    pub filter: CategoryFilter,
    pub sections: Sections,
    pub cards: ExpandedCards,
    /// Activity list loads
    pub list_requests: RequestGeneration,
    /// Per-activity AI summary requests
    pub summary_requests: RequestGeneration,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<UiState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

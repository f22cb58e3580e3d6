//! Activity List View Model
//!
//! Display-ready projections of activities. Components render these as text
//! nodes, so user content is never interpreted as markup.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::Activity;

pub const EMPTY_LIST_MESSAGE: &str = "No activities yet. Add your first activity above!";

/// One collapsible card
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCardView {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub category: String,
    pub description: Option<String>,
    pub ai_summary: Option<String>,
    /// Tags with their `#` prefix
    pub tags: Vec<String>,
}

impl From<&Activity> for ActivityCardView {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            title: activity.title.clone(),
            date: format_activity_date(&activity.date),
            category: activity.category.clone(),
            description: non_empty(&activity.description),
            ai_summary: non_empty(&activity.ai_summary),
            tags: activity.tags.iter().map(|tag| format!("#{}", tag)).collect(),
        }
    }
}

/// What the list container shows
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityListView {
    /// Exactly one placeholder, no cards
    Empty(&'static str),
    Cards(Vec<ActivityCardView>),
}

impl ActivityListView {
    pub fn build(activities: &[Activity]) -> Self {
        if activities.is_empty() {
            ActivityListView::Empty(EMPTY_LIST_MESSAGE)
        } else {
            ActivityListView::Cards(activities.iter().map(ActivityCardView::from).collect())
        }
    }
}

/// Format an ISO-8601 date or date-time as `Jan 5, 2025`.
/// Anything unparseable is returned unchanged.
pub fn format_activity_date(raw: &str) -> String {
    let raw = raw.trim();
    parse_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // Python's isoformat(): no offset, optional fraction
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Activity record (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ai_summary: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Activity {
    pub fn has_summary(&self) -> bool {
        !self.ai_summary.is_empty()
    }
}

/// Create-activity request body (an Activity without its server-assigned id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub title: String,
    pub description: String,
    pub category: String,
    pub ai_summary: String,
    pub date: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityList {
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub total: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
}

/// Aggregate counters shown in the stats panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_activities: usize,
    #[serde(default)]
    pub categories_used: usize,
    #[serde(default)]
    pub category_distribution: BTreeMap<String, usize>,
}

/// AI service availability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiStatus {
    pub enabled: bool,
    #[serde(default)]
    pub model: String,
}

/// Per-activity summary request body.
///
/// `tags` is the raw text of the tags field, the server only uses it as prompt context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummaryRequest<'a> {
    pub activities: &'a [Activity],
}

/// Body returned by both summary endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body the backend attaches to failed requests
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

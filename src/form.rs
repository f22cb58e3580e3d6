//! Activity Form Helpers
//!
//! Pure conversions between raw form input and request bodies.

use crate::error::{ApiError, ApiResult};
use crate::models::{NewActivity, SummaryRequest};
use crate::notify::Notice;

/// Raw values of the create-activity form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Comma-separated tags as typed
    pub tags: String,
    /// `YYYY-MM-DD` from the date input, may be empty
    pub date: String,
}

impl ActivityDraft {
    /// Empty draft dated today
    pub fn new(today: &str) -> Self {
        Self {
            date: today.to_string(),
            ..Default::default()
        }
    }

    /// Build the create request. `ai_summary` is the generated summary shown
    /// in the panel, if any; an empty date falls back to `today`.
    pub fn to_new_activity(&self, ai_summary: Option<&str>, today: &str) -> NewActivity {
        let date = if self.date.trim().is_empty() {
            today.to_string()
        } else {
            self.date.trim().to_string()
        };
        NewActivity {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            ai_summary: ai_summary.map(str::trim).unwrap_or_default().to_string(),
            date,
            tags: parse_tags(&self.tags),
        }
    }

    /// Validate and build the per-activity summary request
    pub fn summary_request(&self) -> ApiResult<SummaryRequest> {
        if self.description.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please fill in the description first".to_string(),
            ));
        }
        Ok(SummaryRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
        })
    }
}

/// Split on commas, trim, and drop empty entries
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// State of the AI-summary panel under the description field
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SummaryPanel {
    #[default]
    Hidden,
    Loading,
    Ready(String),
    Failed(String),
}

impl SummaryPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, SummaryPanel::Hidden)
    }

    /// The generate button is disabled only while a request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, SummaryPanel::Loading)
    }

    /// Panel state and toast once a summary request has answered
    pub fn settle(result: ApiResult<String>) -> (SummaryPanel, Notice) {
        match result {
            Ok(summary) => (
                SummaryPanel::Ready(summary),
                Notice::success("AI summary generated successfully! 🎉"),
            ),
            Err(err) => (
                SummaryPanel::Failed(err.to_string()),
                Notice::error("Failed to generate AI summary"),
            ),
        }
    }

    /// Text shown in the panel
    pub fn text(&self) -> String {
        match self {
            SummaryPanel::Hidden | SummaryPanel::Loading => String::new(),
            SummaryPanel::Ready(summary) => summary.clone(),
            SummaryPanel::Failed(message) => format!("Error: {}", message),
        }
    }

    /// Summary to attach to a new activity. Error text is never attached.
    pub fn generated_summary(&self) -> Option<&str> {
        match self {
            SummaryPanel::Ready(summary) if !summary.trim().is_empty() => Some(summary.as_str()),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SummaryPanel::Loading => "ai-summary-box loading",
            _ => "ai-summary-box",
        }
    }
}

/// Current date as `YYYY-MM-DD`
#[cfg(target_arch = "wasm32")]
pub fn today() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

//! Application Configuration
//!
//! Fixed client settings, provided to components via context.

/// Prefix of every backend endpoint
pub const DEFAULT_API_BASE: &str = "/api";
/// Local-storage key holding the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";
/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub theme_storage_key: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            theme_storage_key: THEME_STORAGE_KEY.to_string(),
            toast_duration_ms: TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Join an endpoint path onto the API base
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

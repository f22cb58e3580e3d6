//! Theme Preference
//!
//! Light/dark theme, persisted in local storage and applied as a class on
//! `<body>`.

use crate::error::{ApiError, ApiResult};

/// Body class present only in the light theme
pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored value; anything unrecognized is the default
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class the body carries for this theme
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some(LIGHT_THEME_CLASS),
            Theme::Dark => None,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }
}

/// Key/value persistence for client preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> ApiResult<()>;
}

/// Read the saved theme
pub fn load_theme(prefs: &impl PreferenceStore, key: &str) -> Theme {
    Theme::from_stored(prefs.get(key).as_deref())
}

/// Flip the theme and persist it. The new theme is returned even when the
/// write fails so the UI still switches.
pub fn toggle_theme(current: Theme, prefs: &impl PreferenceStore, key: &str) -> Theme {
    let next = current.toggled();
    if let Err(err) = prefs.set(key, next.as_str()) {
        log::warn!("Failed to persist theme: {}", err);
    }
    next
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> ApiResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ApiError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ApiError::Storage("localStorage disabled".to_string()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(err) => {
                log::warn!("Reading preference {} failed: {}", key, err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

/// Add or remove the light-theme class on `<body>`
pub fn apply_to_body(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = match theme.body_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1(LIGHT_THEME_CLASS),
    };
    if let Err(e) = result {
        log::warn!("Failed to apply theme class: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryPreferences {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryPreferences {
        fn with(key: &str, value: &str) -> Self {
            let prefs = Self::default();
            prefs.values.borrow_mut().insert(key.to_string(), value.to_string());
            prefs
        }
    }

    impl PreferenceStore for MemoryPreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> ApiResult<()> {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenPreferences;

    impl PreferenceStore for BrokenPreferences {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> ApiResult<()> {
            Err(ApiError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn test_defaults_to_dark() {
        let prefs = MemoryPreferences::default();
        assert_eq!(load_theme(&prefs, "theme"), Theme::Dark);
        let prefs = MemoryPreferences::with("theme", "sepia");
        assert_eq!(load_theme(&prefs, "theme"), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_each_time() {
        let prefs = MemoryPreferences::with("theme", "dark");
        let theme = load_theme(&prefs, "theme");

        let once = toggle_theme(theme, &prefs, "theme");
        assert_eq!(once, Theme::Light);
        assert_eq!(once.body_class(), Some(LIGHT_THEME_CLASS));
        assert_eq!(prefs.get("theme").as_deref(), Some("light"));

        let twice = toggle_theme(once, &prefs, "theme");
        assert_eq!(twice.body_class(), theme.body_class());
        assert_eq!(prefs.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_from_light() {
        let prefs = MemoryPreferences::with("theme", "light");
        let start = load_theme(&prefs, "theme");
        let end = toggle_theme(toggle_theme(start, &prefs, "theme"), &prefs, "theme");
        assert_eq!(end, start);
        assert_eq!(prefs.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        assert_eq!(toggle_theme(Theme::Dark, &BrokenPreferences, "theme"), Theme::Light);
    }
}

//! Activity List Query
//!
//! Server-side filter parameters for `GET /activities`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in query values (RFC 3986 unreserved set)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    pub category: Option<String>,
    pub circle: Option<String>,
}

impl ActivityQuery {
    /// Unfiltered list
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            circle: None,
        }
    }

    /// Encoded query string including the leading `?`, or empty when no
    /// parameter is set. Empty values count as unset.
    pub fn to_query_string(&self) -> String {
        let params: Vec<String> = [("circle", &self.circle), ("category", &self.category)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{}={}", key, utf8_percent_encode(v, QUERY_VALUE)))
            })
            .collect();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

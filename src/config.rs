//! Review log configuration
//!
//! Storage key, display fallbacks and the ids of the page elements the web
//! adapter binds to.

use serde::{Deserialize, Serialize};

/// Review log settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewLogConfig {
    /// LocalStorage key holding the JSON array of reviews
    pub storage_key: String,

    // === Display ===
    /// Shown on a card whose review has no name
    pub placeholder_name: String,

    // === Submission ===
    /// Stored as the name when the form's name field is blank
    pub guest_name: String,
    /// Used when the rating field does not parse to a non-zero integer
    pub default_rating: i64,

    // === Page elements ===
    pub list_id: String,
    pub form_id: String,
    pub name_input_id: String,
    pub rating_input_id: String,
    pub message_input_id: String,
}

impl Default for ReviewLogConfig {
    fn default() -> Self {
        Self {
            storage_key: "ff_reviews_v1".to_string(),

            placeholder_name: "Anonymous".to_string(),

            guest_name: "Guest".to_string(),
            default_rating: 5,

            list_id: "reviewsList".to_string(),
            form_id: "reviewForm".to_string(),
            name_input_id: "name".to_string(),
            rating_input_id: "rating".to_string(),
            message_input_id: "message".to_string(),
        }
    }
}

impl ReviewLogConfig {
    /// Same settings under a different storage key
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let config = ReviewLogConfig::default();
        assert_eq!(config.storage_key, "ff_reviews_v1");
        assert_eq!(config.placeholder_name, "Anonymous");
        assert_eq!(config.guest_name, "Guest");
        assert_eq!(config.default_rating, 5);
        assert_eq!(config.list_id, "reviewsList");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ReviewLogConfig =
            serde_json::from_str(r#"{"storage_key":"other","guest_name":"Visitor"}"#).unwrap();
        assert_eq!(config.storage_key, "other");
        assert_eq!(config.guest_name, "Visitor");
        assert_eq!(config.placeholder_name, "Anonymous");
        assert_eq!(config.form_id, "reviewForm");
    }

    #[test]
    fn test_with_storage_key() {
        let config = ReviewLogConfig::with_storage_key("k");
        assert_eq!(config.storage_key, "k");
        assert_eq!(config.default_rating, 5);
    }
}

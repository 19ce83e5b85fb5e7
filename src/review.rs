//! Review records
//!
//! Stored as a JSON array under one LocalStorage key. Records are read
//! permissively: every field is kept as the JSON it was stored as, so wrong
//! types, explicit nulls and unknown keys all survive a load/save cycle
//! untouched. The accessors interpret values for display.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::consts::{DAY_MS, MAX_STARS};

/// A single submitted review.
///
/// `None` means the key was absent; an explicit `null` is `Some` and is
/// written back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique within the collection, never reassigned
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Text>,
    /// Reviewer name (may be empty)
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Text>,
    /// Star rating, intended 1-5 but not enforced
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Review body
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub message: Option<Text>,
    /// Unix timestamp (ms) of submission
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    /// Keys written by something other than this crate
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A key that is present always deserializes to `Some`, even when `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

static MISSING_RATING: Rating = Rating(Value::Null);

impl Review {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rating: impl Into<Rating>,
        message: impl Into<String>,
        date: i64,
    ) -> Self {
        Self {
            id: Some(Text::new(id)),
            name: Some(Text::new(name)),
            rating: Some(rating.into()),
            message: Some(Text::new(message)),
            date: Some(Timestamp::new(date)),
            extra: Map::new(),
        }
    }

    /// Id as text, `""` if absent or not a string
    pub fn id(&self) -> &str {
        self.id.as_ref().and_then(Text::as_str).unwrap_or("")
    }

    /// Name as displayable text, `""` if absent or null
    pub fn name(&self) -> String {
        self.name.as_ref().map(Text::display).unwrap_or_default()
    }

    /// Message as displayable text, `""` if absent or null
    pub fn message(&self) -> String {
        self.message.as_ref().map(Text::display).unwrap_or_default()
    }

    /// Rating, reading an absent key like `null`
    pub fn rating(&self) -> &Rating {
        self.rating.as_ref().unwrap_or(&MISSING_RATING)
    }

    /// Date in milliseconds if the stored value is numeric
    pub fn date_ms(&self) -> Option<i64> {
        self.date.as_ref().and_then(Timestamp::as_millis)
    }
}

/// Raw text field as stored
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text(Value);

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self(Value::String(text.into()))
    }

    pub fn from_raw(value: Value) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// The string, if this really is one
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// What a page would show: strings as-is, numbers and booleans in their
    /// JSON spelling, anything else as `""`
    pub fn display(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }
}

/// Raw date value as stored
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(Value);

impl Timestamp {
    pub fn new(ms: i64) -> Self {
        Self(Value::from(ms))
    }

    pub fn from_raw(value: Value) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Milliseconds for numeric values; fractions truncate toward zero
    pub fn as_millis(&self) -> Option<i64> {
        number_as_i64(&self.0)
    }
}

/// Raw rating value as stored.
///
/// Kept as JSON so fractional, negative, oversized or non-numeric ratings
/// survive storage unchanged. Only the star count is interpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(Value);

impl Rating {
    pub fn new(stars: i64) -> Self {
        Self(Value::from(stars))
    }

    /// Wrap an arbitrary stored value
    pub fn from_raw(value: Value) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// True for an explicit or implied null
    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }

    /// Integer reading of the rating; fractions truncate toward zero
    pub fn as_i64(&self) -> Option<i64> {
        number_as_i64(&self.0)
    }

    /// Number of filled stars to show, clamped to `0..=MAX_STARS`
    pub fn filled_stars(&self) -> usize {
        self.as_i64().unwrap_or(0).clamp(0, MAX_STARS as i64) as usize
    }
}

impl From<i64> for Rating {
    fn from(stars: i64) -> Self {
        Self::new(stars)
    }
}

fn number_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    }
}

/// The two sample reviews shown when nothing is stored, oldest first.
///
/// Dates are relative to `now_ms` so the samples always look recent.
pub fn seed_reviews(now_ms: i64) -> Vec<Review> {
    vec![
        Review::new(
            "r1",
            "Анна",
            5,
            "Отличная работа! Детали идеально подошли.",
            now_ms - 10 * DAY_MS,
        ),
        Review::new(
            "r2",
            "Oleg",
            4,
            "Хорошее качество, быстрая доставка.",
            now_ms - 3 * DAY_MS,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_order_and_dates() {
        let seed = seed_reviews(100 * DAY_MS);
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id(), "r1");
        assert_eq!(seed[0].name(), "Анна");
        assert_eq!(seed[0].rating(), &Rating::new(5));
        assert_eq!(seed[0].date_ms(), Some(90 * DAY_MS));
        assert_eq!(seed[1].id(), "r2");
        assert_eq!(seed[1].name(), "Oleg");
        assert_eq!(seed[1].date_ms(), Some(97 * DAY_MS));
    }

    #[test]
    fn test_serialized_field_names() {
        let review = Review::new("r7", "Maria", 3, "Good", 1_000);
        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(
            value,
            json!({"id": "r7", "name": "Maria", "rating": 3, "message": "Good", "date": 1000})
        );
    }

    #[test]
    fn test_missing_fields_stay_missing() {
        let review: Review = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(review.name(), "");
        assert_eq!(review.message(), "");
        assert!(review.rating().is_missing());
        assert_eq!(review.date_ms(), None);
        assert_eq!(serde_json::to_value(&review).unwrap(), json!({"id": "x"}));
    }

    #[test]
    fn test_explicit_nulls_written_back() {
        let raw = json!({"id": "a", "name": null, "rating": null, "message": null, "date": null});
        let review: Review = serde_json::from_value(raw.clone()).unwrap();
        assert!(review.rating.is_some());
        assert!(review.rating().is_missing());
        assert_eq!(review.name(), "");
        assert_eq!(review.date_ms(), None);
        assert_eq!(serde_json::to_value(&review).unwrap(), raw);
    }

    #[test]
    fn test_wrong_types_kept_verbatim() {
        let raw = json!({"id": 7, "name": 42, "rating": "lots", "message": ["x"], "date": "yesterday"});
        let review: Review = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(review.id(), "");
        assert_eq!(review.name(), "42");
        assert_eq!(review.message(), "");
        assert_eq!(review.rating().raw(), &json!("lots"));
        assert_eq!(review.date_ms(), None);
        assert_eq!(serde_json::to_value(&review).unwrap(), raw);
    }

    #[test]
    fn test_fractional_date_truncates() {
        let review: Review = serde_json::from_str(r#"{"date": 1.7e12}"#).unwrap();
        assert_eq!(review.date_ms(), Some(1_700_000_000_000));
        assert_eq!(Timestamp::from_raw(json!(-2.9)).as_millis(), Some(-2));
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let raw = json!({"id": "a", "name": "n", "rating": 2, "message": "m", "date": 5, "verified": true});
        let review: Review = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(review.extra.get("verified"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&review).unwrap(), raw);
    }

    #[test]
    fn test_filled_stars_clamps() {
        assert_eq!(Rating::new(0).filled_stars(), 0);
        assert_eq!(Rating::new(3).filled_stars(), 3);
        assert_eq!(Rating::new(5).filled_stars(), 5);
        assert_eq!(Rating::new(-2).filled_stars(), 0);
        assert_eq!(Rating::new(99).filled_stars(), 5);
        assert_eq!(Rating::from_raw(json!(3.9)).filled_stars(), 3);
        assert_eq!(Rating::from_raw(json!(u64::MAX)).filled_stars(), 5);
        assert_eq!(Rating::from_raw(json!("4")).filled_stars(), 0);
        assert_eq!(Rating::default().filled_stars(), 0);
    }
}

//! Form submission
//!
//! Turns the three raw form fields into a [`Review`]. The only hard check is
//! a non-blank message; everything else gets a default.

use crate::config::ReviewLogConfig;
use crate::error::SubmitError;
use crate::review::Review;

/// Raw values read from the review form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub rating: String,
    pub message: String,
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        rating: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating: rating.into(),
            message: message.into(),
        }
    }

    /// Build the review this submission describes.
    ///
    /// `existing` is only consulted to keep the new id unique.
    pub fn into_review(
        self,
        existing: &[Review],
        now_ms: i64,
        config: &ReviewLogConfig,
    ) -> Result<Review, SubmitError> {
        let message = trim_js(&self.message);
        if message.is_empty() {
            return Err(SubmitError::EmptyMessage);
        }

        let name = match trim_js(&self.name) {
            "" => config.guest_name.as_str(),
            name => name,
        };
        let rating = resolve_rating(&self.rating, config.default_rating);

        Ok(Review::new(
            unique_id(existing, now_ms),
            name,
            rating,
            message,
            now_ms,
        ))
    }
}

/// Whitespace as a browser's `String.prototype.trim` sees it: Unicode
/// spaces plus U+FEFF, but not U+0085
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// `raw` trimmed the way the form's `value.trim()` trims
pub fn trim_js(raw: &str) -> &str {
    raw.trim_matches(is_js_whitespace)
}

/// Integer prefix of `raw`, read the way a browser's `parseInt(raw, 10)` does.
///
/// Leading whitespace and one sign are allowed; parsing stops at the first
/// non-digit. `None` when there are no digits at all. Values past the `i64`
/// range saturate.
pub fn parse_rating(raw: &str) -> Option<i64> {
    let s = raw.trim_start_matches(is_js_whitespace);
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let value = match digits.parse::<i64>() {
        Ok(v) => v,
        Err(_) => i64::MAX,
    };
    Some(if negative { value.saturating_neg() } else { value })
}

/// Parsed rating, or `default` when unparseable or zero
pub fn resolve_rating(raw: &str, default: i64) -> i64 {
    parse_rating(raw).filter(|&n| n != 0).unwrap_or(default)
}

/// `r<now_ms>`, bumped forward until no existing review uses it
pub fn unique_id(existing: &[Review], now_ms: i64) -> String {
    let mut stamp = now_ms;
    loop {
        let id = format!("r{stamp}");
        if !existing.iter().any(|r| r.id() == id) {
            return id;
        }
        stamp = stamp.wrapping_add(1);
    }
}

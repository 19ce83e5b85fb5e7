//! Wall clock and date display

use super::Clock;

/// Text shown for timestamps that cannot be turned into a calendar date
pub const INVALID_DATE: &str = "Invalid Date";

/// The real clock: `Date.now()` on web, system time elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock stuck at one instant, for tests and reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Format a timestamp as a localized date string
#[cfg(target_arch = "wasm32")]
pub fn format_date(timestamp_ms: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms as f64));
    if date.get_time().is_nan() {
        return INVALID_DATE.to_string();
    }
    date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Format a timestamp as `M/D/YYYY` (UTC)
#[cfg(not(target_arch = "wasm32"))]
pub fn format_date(timestamp_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_epoch() {
        assert_eq!(format_date(0), "1/1/1970");
    }

    #[test]
    fn test_format_date_known_day() {
        // 2024-03-05T12:00:00Z
        assert_eq!(format_date(1_709_640_000_000), "3/5/2024");
    }

    #[test]
    fn test_format_date_out_of_range() {
        assert_eq!(format_date(i64::MAX), INVALID_DATE);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(42).now_ms(), 42);
    }

    #[test]
    fn test_system_clock_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}

//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Time (wall clock and date formatting)
//!
//! Both are passed into the store and renderer as capabilities rather than
//! reached for globally, so tests can swap in doubles.

pub mod storage;
pub mod time;

use crate::error::StorageError;

pub use storage::MemoryStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use time::{FixedClock, SystemClock, format_date};

/// Key/value string storage scoped to the page origin.
///
/// Methods take `&self`: the browser API is itself shared, and every caller
/// in this crate runs on one thread inside one event handler.
pub trait Storage {
    /// Read the value under `key`. `Ok(None)` means nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Source of the current wall-clock time.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

impl<S: Storage + ?Sized> Storage for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

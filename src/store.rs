//! Review store
//!
//! Owns the persisted review collection: one JSON array under one storage
//! key, in insertion order. Reads fall back to the seed samples when nothing
//! usable is stored; writes are best-effort.
//!
//! There is no cross-tab coordination. Two tabs appending at the same time
//! both read, both write, and the later write wins.

use crate::config::ReviewLogConfig;
use crate::error::StoreResult;
use crate::platform::{Clock, Storage};
use crate::review::{Review, seed_reviews};

/// Where a loaded collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from storage
    Stored,
    /// Nothing stored yet, seed substituted
    Seed,
    /// Storage unreadable or corrupt, seed substituted
    Recovered,
}

/// Persistence boundary for the review collection
#[derive(Debug)]
pub struct ReviewStore<S, C> {
    storage: S,
    clock: C,
    key: String,
}

impl<S: Storage, C: Clock> ReviewStore<S, C> {
    pub fn new(storage: S, clock: C, key: impl Into<String>) -> Self {
        Self {
            storage,
            clock,
            key: key.into(),
        }
    }

    pub fn from_config(storage: S, clock: C, config: &ReviewLogConfig) -> Self {
        Self::new(storage, clock, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Read the stored collection without any fallback.
    ///
    /// `Ok(None)` means nothing (or an empty string) is stored. Only the JSON
    /// shape is checked; field values are passed through as they are.
    pub fn try_load(&self) -> StoreResult<Option<Vec<Review>>> {
        let raw = match self.storage.get(&self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };
        let items = serde_json::from_str(&raw)?;
        Ok(Some(items))
    }

    /// Load the collection, reporting whether the seed was substituted
    pub fn load_with_source(&self) -> (Vec<Review>, LoadSource) {
        match self.try_load() {
            Ok(Some(items)) => (items, LoadSource::Stored),
            Ok(None) => (seed_reviews(self.clock.now_ms()), LoadSource::Seed),
            Err(e) => {
                log::error!("Failed to load reviews: {}", e);
                (seed_reviews(self.clock.now_ms()), LoadSource::Recovered)
            }
        }
    }

    /// Load the collection in insertion order. Never fails.
    ///
    /// The seed is returned as a fresh copy and is not written back; it only
    /// becomes persisted once something is appended after it.
    pub fn load(&self) -> Vec<Review> {
        self.load_with_source().0
    }

    /// Serialize and write the whole collection, overwriting what was there
    pub fn try_save(&self, items: &[Review]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    /// Best-effort save: failures are logged and otherwise ignored
    pub fn save(&self, items: &[Review]) {
        match self.try_save(items) {
            Ok(()) => log::info!("Reviews saved ({} entries)", items.len()),
            Err(e) => log::error!("Failed to save reviews: {}", e),
        }
    }

    /// Append one review to the end of the collection and save.
    ///
    /// Returns the collection as it now stands in memory, whether or not the
    /// write reached storage.
    pub fn append(&self, review: Review) -> Vec<Review> {
        self.append_to(self.load(), review)
    }

    /// Append to a collection the caller has just loaded, skipping the
    /// second read. `items` must be what `load` returned.
    pub fn append_to(&self, mut items: Vec<Review>, review: Review) -> Vec<Review> {
        items.push(review);
        self.save(&items);
        items
    }
}

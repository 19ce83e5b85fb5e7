//! Review list rendering
//!
//! Rendering is split in two: [`display_model`] turns the loaded collection
//! into cards (pure), and a [`Mount`] swaps those cards into the page. The
//! whole list is rebuilt on every call; there is no diffing.

use std::fmt;

use crate::config::ReviewLogConfig;
use crate::consts::{EMPTY_STAR, FILLED_STAR, MAX_STARS};
use crate::platform::{Clock, Storage, format_date};
use crate::review::{Rating, Review};
use crate::store::ReviewStore;

/// Star row for one card, always `MAX_STARS` glyphs long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    pub filled: usize,
    pub empty: usize,
}

impl Stars {
    pub fn from_rating(rating: &Rating) -> Self {
        let filled = rating.filled_stars();
        Self {
            filled,
            empty: MAX_STARS - filled,
        }
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.filled {
            f.write_str(FILLED_STAR)?;
        }
        for _ in 0..self.empty {
            f.write_str(EMPTY_STAR)?;
        }
        Ok(())
    }
}

/// Everything one review card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub id: String,
    pub name: String,
    pub date: String,
    pub stars: Stars,
    pub message: String,
}

impl ReviewCard {
    /// Build a card, filling in display fallbacks.
    ///
    /// A missing, zero or non-numeric date shows as `now_ms`.
    pub fn from_review(review: &Review, placeholder_name: &str, now_ms: i64) -> Self {
        let mut name = review.name();
        if name.is_empty() {
            name = placeholder_name.to_string();
        }
        let timestamp = review.date_ms().filter(|&d| d != 0).unwrap_or(now_ms);

        Self {
            id: review.id().to_string(),
            name,
            date: format_date(timestamp),
            stars: Stars::from_rating(review.rating()),
            message: review.message(),
        }
    }
}

/// Cards for `items`, newest (last appended) first
pub fn display_model(items: &[Review], placeholder_name: &str, now_ms: i64) -> Vec<ReviewCard> {
    items
        .iter()
        .rev()
        .map(|review| ReviewCard::from_review(review, placeholder_name, now_ms))
        .collect()
}

/// A place the rendered list is shown
pub trait Mount {
    /// Drop whatever is displayed and show `cards` in order
    fn replace_cards(&mut self, cards: &[ReviewCard]);
}

impl Mount for Vec<ReviewCard> {
    fn replace_cards(&mut self, cards: &[ReviewCard]) {
        self.clear();
        self.extend_from_slice(cards);
    }
}

/// Stateless projection from the store to a mount
#[derive(Debug, Clone)]
pub struct ReviewRenderer {
    placeholder_name: String,
}

impl ReviewRenderer {
    pub fn new(placeholder_name: impl Into<String>) -> Self {
        Self {
            placeholder_name: placeholder_name.into(),
        }
    }

    pub fn from_config(config: &ReviewLogConfig) -> Self {
        Self::new(config.placeholder_name.clone())
    }

    /// Load from `store` and build the display model
    pub fn view<S: Storage, C: Clock>(&self, store: &ReviewStore<S, C>) -> Vec<ReviewCard> {
        let items = store.load();
        display_model(&items, &self.placeholder_name, store.clock().now_ms())
    }

    /// Rebuild the list in `mount`. Returns the number of cards shown.
    pub fn render<S: Storage, C: Clock, M: Mount + ?Sized>(
        &self,
        store: &ReviewStore<S, C>,
        mount: &mut M,
    ) -> usize {
        let cards = self.view(store);
        mount.replace_cards(&cards);
        log::debug!("Rendered {} reviews", cards.len());
        cards.len()
    }
}

impl Default for ReviewRenderer {
    fn default() -> Self {
        Self::from_config(&ReviewLogConfig::default())
    }
}

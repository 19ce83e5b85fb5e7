//! Review board
//!
//! Wires the store, renderer and submission handling together:
//! submit → append → save → full re-render.

use crate::config::ReviewLogConfig;
use crate::error::SubmitError;
use crate::platform::{Clock, Storage};
use crate::render::{Mount, ReviewCard, ReviewRenderer};
use crate::review::Review;
use crate::store::ReviewStore;
use crate::submit::Submission;

#[derive(Debug)]
pub struct ReviewBoard<S, C> {
    store: ReviewStore<S, C>,
    renderer: ReviewRenderer,
    config: ReviewLogConfig,
}

impl<S: Storage, C: Clock> ReviewBoard<S, C> {
    pub fn new(storage: S, clock: C, config: ReviewLogConfig) -> Self {
        Self {
            store: ReviewStore::from_config(storage, clock, &config),
            renderer: ReviewRenderer::from_config(&config),
            config,
        }
    }

    pub fn store(&self) -> &ReviewStore<S, C> {
        &self.store
    }

    pub fn config(&self) -> &ReviewLogConfig {
        &self.config
    }

    /// Current cards, newest first
    pub fn cards(&self) -> Vec<ReviewCard> {
        self.renderer.view(&self.store)
    }

    /// Redraw the whole list into `mount`
    pub fn render<M: Mount + ?Sized>(&self, mount: &mut M) -> usize {
        self.renderer.render(&self.store, mount)
    }

    /// Accept a form submission.
    ///
    /// On success the review is appended, saved (best-effort) and the list in
    /// `mount` redrawn. A rejected submission touches neither storage nor the
    /// mount.
    pub fn submit<M: Mount + ?Sized>(
        &self,
        submission: Submission,
        mount: &mut M,
    ) -> Result<Review, SubmitError> {
        let now = self.store.clock().now_ms();
        let existing = self.store.load();
        let review = submission.into_review(&existing, now, &self.config)?;

        log::info!("New review {} ({})", review.id(), review.name());
        self.store.append_to(existing, review.clone());
        self.render(mount);
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedClock, MemoryStorage};
    use crate::render::Stars;
    use std::rc::Rc;

    const NOW: i64 = 1_700_000_000_000;

    fn board() -> ReviewBoard<Rc<MemoryStorage>, FixedClock> {
        ReviewBoard::new(
            Rc::new(MemoryStorage::new()),
            FixedClock(NOW),
            ReviewLogConfig::default(),
        )
    }

    #[test]
    fn test_submit_from_seed_state() {
        let board = board();
        let mut mount: Vec<ReviewCard> = Vec::new();

        let review = board
            .submit(Submission::new("Maria", "3", "Good"), &mut mount)
            .unwrap();

        assert_eq!(board.store().load().len(), 3);
        assert_eq!(mount.len(), 3);
        assert_eq!(mount[0].id, review.id());
        assert_eq!(mount[0].name, "Maria");
        assert_eq!(mount[0].stars, Stars { filled: 3, empty: 2 });
        assert_eq!(mount[0].stars.to_string(), "★★★☆☆");
        assert_eq!(mount[1].name, "Oleg");
        assert_eq!(mount[2].name, "Анна");
    }

    #[test]
    fn test_rejected_submission_has_no_effect() {
        let board = board();
        let mut mount: Vec<ReviewCard> = Vec::new();
        board.render(&mut mount);
        let before = mount.clone();

        let result = board.submit(Submission::new("Maria", "3", "   "), &mut mount);

        assert_eq!(result, Err(SubmitError::EmptyMessage));
        assert_eq!(board.store().storage().write_count(), 0);
        assert_eq!(mount, before);
    }

    #[test]
    fn test_same_millisecond_submissions_get_distinct_ids() {
        let board = board();
        let mut mount: Vec<ReviewCard> = Vec::new();
        let a = board.submit(Submission::new("A", "1", "one"), &mut mount).unwrap();
        let b = board.submit(Submission::new("B", "2", "two"), &mut mount).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(mount[0].id, b.id());
        assert_eq!(mount[1].id, a.id());
    }

    #[test]
    fn test_submit_persists_to_configured_key() {
        let storage = Rc::new(MemoryStorage::new());
        let board = ReviewBoard::new(storage.clone(), FixedClock(NOW), ReviewLogConfig::default());
        board
            .submit(Submission::new("", "", "hello"), &mut Vec::<ReviewCard>::new())
            .unwrap();

        let raw = storage.raw("ff_reviews_v1").unwrap();
        let stored: Vec<Review> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[2].name(), "Guest");
        assert_eq!(stored[2].rating().as_i64(), Some(5));
    }

    #[test]
    fn test_submit_reads_storage_once_before_render() {
        let board = board();
        board
            .submit(Submission::new("A", "4", "one"), &mut Vec::<ReviewCard>::new())
            .unwrap();
        // One load to build the review, one for the re-render
        assert_eq!(board.store().storage().read_count(), 2);
        assert_eq!(board.store().storage().write_count(), 1);
    }

    #[test]
    fn test_cards_match_render() {
        let board = board();
        let mut mount: Vec<ReviewCard> = Vec::new();
        board.render(&mut mount);
        assert_eq!(board.cards(), mount);
    }
}

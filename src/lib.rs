//! Review Log - browser-local customer reviews
//!
//! Core modules:
//! - `review`: Review records and the seed samples
//! - `store`: LocalStorage-backed persistence with seed fallback
//! - `render`: Display model and list rendering
//! - `submit`: Form input to review conversion
//! - `board`: Submit/append/render control flow
//! - `platform`: Browser/native storage and clock abstraction
//! - `web`: DOM bindings (wasm32 only)

pub mod board;
pub mod config;
pub mod error;
pub mod platform;
pub mod render;
pub mod review;
pub mod store;
pub mod submit;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use board::ReviewBoard;
pub use config::ReviewLogConfig;
pub use error::{StorageError, StoreError, SubmitError};
pub use render::{Mount, ReviewCard, ReviewRenderer, Stars};
pub use review::{Rating, Review};
pub use store::{LoadSource, ReviewStore};
pub use submit::Submission;

/// Review log constants
pub mod consts {
    /// Glyphs per star row
    pub const MAX_STARS: usize = 5;
    pub const FILLED_STAR: &str = "★";
    pub const EMPTY_STAR: &str = "☆";

    /// One day in milliseconds (seed dates are offsets from now)
    pub const DAY_MS: i64 = 1000 * 60 * 60 * 24;
}

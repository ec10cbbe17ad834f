//! SM-2 style spaced-repetition scheduling for flashcard decks.
//!
//! `models::sm2` holds the scheduler itself: pure functions from a review
//! state, a grade and the current time to the next state and due date.
//! `store` wires it to whatever keeps states and the review log, and
//! `export` reads and writes review logs and configs as JSON.

pub mod error;
pub mod export;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use models::sm2::{JitterSource, apply_grade, next_due_at, next_due_at_with, review};
pub use models::{ReviewLogEntry, ReviewState, SchedulerConfig};

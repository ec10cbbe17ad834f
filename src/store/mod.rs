//! Host-side glue between a review store and the scheduler.
//!
//! `ReviewStore` is whatever keeps review states and the review log (a
//! database, a file, or `MemoryStore`). `ReviewService` runs the
//! load -> grade -> reschedule -> save cycle for one item at a time.

pub mod memory;
pub mod service;

pub use memory::MemoryStore;
pub use service::ReviewService;

use crate::error::Result;
use crate::models::{ReviewLogEntry, ReviewState};

pub trait ReviewStore {
    /// Current state of an item, `None` if it has never been stored.
    fn state(&self, item_id: i64) -> Result<Option<ReviewState>>;

    /// Stores `state` only if the item has none yet. Returns whether it was inserted.
    fn insert_state(&mut self, item_id: i64, state: &ReviewState) -> Result<bool>;

    /// Replaces the item's state and appends `entry` to the log as one unit.
    fn save_state_and_log(
        &mut self,
        item_id: i64,
        state: &ReviewState,
        entry: &ReviewLogEntry,
    ) -> Result<()>;

    /// Takes an item out of (or puts it back into) the due queue. Its state is kept.
    fn set_excluded(&mut self, item_id: i64, excluded: bool) -> Result<()>;

    /// Ids of non-excluded items with `due_at <= now_ms`, earliest first
    /// (ties by id), at most `limit`.
    fn due_items(&self, now_ms: i64, limit: usize) -> Result<Vec<i64>>;

    /// Log entries for one item, oldest first.
    fn log_for(&self, item_id: i64) -> Result<Vec<ReviewLogEntry>>;
}

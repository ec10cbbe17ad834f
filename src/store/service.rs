//! Review-and-schedule workflow on top of a `ReviewStore`.

use super::ReviewStore;
use crate::error::Result;
use crate::models::sm2::{self, JitterSource};
use crate::models::{ReviewLogEntry, ReviewState, SchedulerConfig};
use log::{debug, info};

pub struct ReviewService<S: ReviewStore> {
    store: S,
    config: SchedulerConfig,
}

impl<S: ReviewStore> ReviewService<S> {
    pub fn new(store: S, config: SchedulerConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Gives a new item its initial state so it shows up in `due_batch` right away.
    /// Items that already have a state are left alone.
    pub fn register_item(&mut self, item_id: i64, now_ms: i64) -> Result<ReviewState> {
        let initial = ReviewState::new(self.config.ease_init, now_ms);
        if self.store.insert_state(item_id, &initial)? {
            debug!("event=item_registered item_id={item_id} due_at={now_ms}");
            return Ok(initial);
        }
        Ok(self.store.state(item_id)?.unwrap_or(initial))
    }

    /// Applies the user's grade, reschedules the item and records the review.
    pub fn review_and_schedule(
        &mut self,
        item_id: i64,
        grade: i32,
        now_ms: i64,
    ) -> Result<ReviewState> {
        self.review_and_schedule_with(item_id, grade, now_ms, &mut rand::thread_rng())
    }

    /// `review_and_schedule` with an explicit fuzz source.
    pub fn review_and_schedule_with<J: JitterSource + ?Sized>(
        &mut self,
        item_id: i64,
        grade: i32,
        now_ms: i64,
        jitter: &mut J,
    ) -> Result<ReviewState> {
        let prior = self.store.state(item_id)?;
        let next = sm2::review(prior.as_ref(), grade, now_ms, &self.config, jitter);

        let recorded_grade = next.last_grade.unwrap_or_default();
        let entry = ReviewLogEntry::from_review(item_id, now_ms, recorded_grade, &next);
        self.store.save_state_and_log(item_id, &next, &entry)?;

        debug!(
            "event=item_reviewed item_id={} grade={} step={} interval_days={} ease={:.2} due_at={}",
            item_id, recorded_grade, next.step, next.interval_days, next.ease, next.due_at
        );
        Ok(next)
    }

    /// Suspends an item so it no longer shows up in `due_batch`, or resumes it.
    /// Its review state and history are untouched.
    pub fn set_excluded(&mut self, item_id: i64, excluded: bool) -> Result<()> {
        self.store.set_excluded(item_id, excluded)?;
        info!("event=item_excluded item_id={item_id} excluded={excluded}");
        Ok(())
    }

    /// Items due at `now_ms`, earliest first.
    pub fn due_batch(&self, now_ms: i64, limit: usize) -> Result<Vec<i64>> {
        let due = self.store.due_items(now_ms, limit)?;
        info!(
            "event=due_batch count={} limit={} now={}",
            due.len(),
            limit,
            now_ms
        );
        Ok(due)
    }

    pub fn history(&self, item_id: i64) -> Result<Vec<ReviewLogEntry>> {
        self.store.log_for(item_id)
    }
}

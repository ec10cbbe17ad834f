//! One immutable record per grading event.
use super::ReviewState;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewLogEntry {
    pub item_id: i64,
    pub reviewed_at: i64,
    pub grade: u8,
    pub interval_days: i32,
    pub ease: f64,
    pub step: i32,
}

impl ReviewLogEntry {
    /// Builds the entry for a review that produced `result` at `reviewed_at`.
    pub fn from_review(item_id: i64, reviewed_at: i64, grade: u8, result: &ReviewState) -> Self {
        Self {
            item_id,
            reviewed_at,
            grade,
            interval_days: result.interval_days,
            ease: result.ease,
            step: result.step,
        }
    }
}

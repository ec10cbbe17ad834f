//! Spaced-repetition state of a single item.
use serde::{Deserialize, Serialize};

/// Step at which an item leaves the learning phase.
pub const MATURE_STEP: i32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// 0 while learning.
    pub interval_days: i32,
    pub ease: f64,
    /// 0..=2 learning, >= 3 mature.
    pub step: i32,
    /// Clamped grade of the most recent review; `None` before the first one.
    pub last_grade: Option<u8>,
    /// Unix milliseconds.
    pub due_at: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Learning { step: i32 },
    Mature,
}

impl ReviewState {
    /// State of an item that has never been graded. It is due immediately.
    pub fn new(ease_init: f64, now_ms: i64) -> Self {
        Self {
            interval_days: 0,
            ease: ease_init,
            step: 0,
            last_grade: None,
            due_at: now_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.step >= MATURE_STEP {
            Phase::Mature
        } else {
            Phase::Learning {
                step: self.step.max(0),
            }
        }
    }

    pub fn is_due(&self, now_ms: i64) -> bool {
        self.due_at <= now_ms
    }
}

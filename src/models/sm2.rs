//! SM-2 (SuperMemo 2) style spaced repetition scheduler.
//!
//! The algorithm moves an item through two phases:
//! - Learning (step 0-2): each passing grade advances one step; reaching step 3
//!   graduates the item with a 1-day interval
//! - Mature (step >= 3): passing grades grow the interval, 1 day -> 3 days -> interval * ease
//!
//! Grades 0-2 fail and send the item back to learning step 0 with a 0.20 ease
//! penalty. Passing grades move ease by the SM-2 delta. Ease is kept within
//! `[ease_min, ease_max]` after every update.
//!
//! The due timestamp is derived from the interval alone: optionally snapped to
//! 03:00 of its calendar day, then fuzzed by a few percent of the interval so
//! items graded together don't all come back at the same moment.
//!
//! Everything here is pure. The only randomness comes in through `JitterSource`.

use super::review_state::MATURE_STEP;
use super::{AnswerButton, DayBoundary, ReviewState, SchedulerConfig};
use chrono::{Duration, Local, TimeZone};
use rand::{Rng, RngCore};

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const ALIGN_HOUR_MS: i64 = 3 * 60 * 60 * 1000;
const MAX_GAP_MINUTES: i64 = 24 * 60;

const PASS_GRADE: i32 = 3;
const FAIL_EASE_PENALTY: f64 = 0.20;

/// Random source for due-date fuzz.
///
/// Every `rand` generator implements it, so production code passes
/// `thread_rng()` and tests pass a seeded `StdRng` or a fixed stub.
pub trait JitterSource {
    /// Draws a fraction uniformly from `[lo, hi]`. Callers guarantee `0 <= lo <= hi`.
    fn fuzz_percent(&mut self, lo: f64, hi: f64) -> f64;

    /// `true` pushes the due date later, `false` earlier.
    fn coin_flip(&mut self) -> bool;
}

impl<R: RngCore> JitterSource for R {
    fn fuzz_percent(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.gen_range(lo..=hi)
    }

    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

// ease_min wins if the bounds are swapped; f64::clamp would panic there.
fn clamp_ease(ease: f64, config: &SchedulerConfig) -> f64 {
    ease.min(config.ease_max).max(config.ease_min)
}

/// Applies one grade to `state` and returns the updated state.
///
/// grade: 0-5, out-of-range values are clamped. `due_at` is carried over
/// unchanged; use `review` to get a rescheduled state.
pub fn apply_grade(state: &ReviewState, grade: i32, config: &SchedulerConfig) -> ReviewState {
    let grade = grade.clamp(0, 5);

    let mut next = state.clone();
    next.last_grade = Some(grade as u8);
    next.interval_days = next.interval_days.max(0);
    next.step = next.step.max(0);
    if next.ease.is_nan() || next.ease <= 0.0 {
        next.ease = config.ease_init;
    }

    if grade < PASS_GRADE {
        next.step = 0;
        next.interval_days = 0;
        next.ease = clamp_ease(next.ease - FAIL_EASE_PENALTY, config);
        return next;
    }

    let diff = f64::from(5 - grade);
    let delta = config.delta_base - diff * (config.delta_a + diff * config.delta_b);
    next.ease = clamp_ease(next.ease + delta, config);

    if next.step < MATURE_STEP {
        next.step += 1;
        // Graduation keeps an interval carried over from earlier data.
        if next.step >= MATURE_STEP && next.interval_days <= 0 {
            next.interval_days = 1;
        }
        return next;
    }

    next.interval_days = match next.interval_days {
        i32::MIN..=0 => 1,
        1 => 3,
        days => ((f64::from(days) * next.ease).round() as i32).max(1),
    };
    next
}

/// Computes when an item with `interval_days` becomes due, measured from `now_ms`.
pub fn next_due_at_with<J: JitterSource + ?Sized>(
    interval_days: i32,
    now_ms: i64,
    config: &SchedulerConfig,
    jitter: &mut J,
) -> i64 {
    let interval_ms = i64::from(interval_days.max(0)) * DAY_MS;
    let mut due = now_ms.saturating_add(interval_ms);

    if config.align_due_at_to_3am {
        due = align_to_3am(due, config.day_boundary);
    }

    if config.enable_fuzz && interval_days > 0 {
        let lo = fuzz_bound(config.fuzz_percent_min);
        let hi = fuzz_bound(config.fuzz_percent_max);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        let percent = jitter.fuzz_percent(lo, hi);
        let offset = (interval_ms as f64 * percent).round() as i64;
        due = if jitter.coin_flip() {
            due.saturating_add(offset)
        } else {
            due.saturating_sub(offset)
        };
    }

    due
}

// Negative, NaN or infinite percents count as 0.
fn fuzz_bound(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.max(0.0)
    } else {
        0.0
    }
}

/// `next_due_at_with` backed by the thread-local RNG.
pub fn next_due_at(interval_days: i32, now_ms: i64, config: &SchedulerConfig) -> i64 {
    next_due_at_with(interval_days, now_ms, config, &mut rand::thread_rng())
}

/// Grades an item and reschedules it.
///
/// `prior` is `None` for an item that has never been graded; it then starts
/// from `ReviewState::new`. The returned state carries the new `due_at` and
/// `last_grade`.
pub fn review<J: JitterSource + ?Sized>(
    prior: Option<&ReviewState>,
    grade: i32,
    now_ms: i64,
    config: &SchedulerConfig,
    jitter: &mut J,
) -> ReviewState {
    let state = prior
        .cloned()
        .unwrap_or_else(|| ReviewState::new(config.ease_init, now_ms));

    let mut next = apply_grade(&state, grade, config);
    next.due_at = next_due_at_with(next.interval_days, now_ms, config, jitter);
    next
}

/// Interval each answer button would give, in `AnswerButton::ALL` order.
pub fn preview_intervals(state: &ReviewState, config: &SchedulerConfig) -> [i32; 4] {
    AnswerButton::ALL.map(|button| apply_grade(state, button.grade(), config).interval_days)
}

fn align_to_3am(ms: i64, boundary: DayBoundary) -> i64 {
    match boundary {
        DayBoundary::Utc => utc_3am(ms),
        DayBoundary::Local => zoned_3am(ms, &Local).unwrap_or_else(|| utc_3am(ms)),
    }
}

fn utc_3am(ms: i64) -> i64 {
    ms.saturating_sub(ms.rem_euclid(DAY_MS))
        .saturating_add(ALIGN_HOUR_MS)
}

/// 03:00 in `tz` on the local calendar day of `ms`.
///
/// If 03:00 happens twice (DST fold) the first one wins. If a DST gap skips
/// it, the first minute after the gap is used. `None` only when the
/// timestamp is outside chrono's range.
fn zoned_3am<Tz: TimeZone>(ms: i64, tz: &Tz) -> Option<i64> {
    let date = tz.timestamp_millis_opt(ms).single()?.date_naive();
    let three_am = date.and_hms_opt(3, 0, 0)?;
    (0..=MAX_GAP_MINUTES)
        .find_map(|minute| {
            tz.from_local_datetime(&(three_am + Duration::minutes(minute)))
                .earliest()
        })
        .map(|aligned| aligned.timestamp_millis())
}

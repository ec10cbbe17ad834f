//! Tunable parameters for the SM-2 scheduler.
//!
//! Every field has a default, and a JSON document may override any subset of
//! them. Call `validate()` (or `from_json_str`, which does it for you) before
//! trusting a config that came from outside the program.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which clock the "snap to 03:00" step measures calendar days on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// Days start at 00:00 UTC. DST never shifts the result.
    #[default]
    Utc,
    /// Days start at local midnight, following the machine's time zone.
    Local,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub ease_min: f64,
    pub ease_max: f64,
    pub ease_init: f64,

    // delta = delta_base - diff * (delta_a + diff * delta_b), diff = 5 - grade
    pub delta_base: f64,
    pub delta_a: f64,
    pub delta_b: f64,

    pub align_due_at_to_3am: bool,
    pub day_boundary: DayBoundary,

    pub enable_fuzz: bool,
    pub fuzz_percent_min: f64,
    pub fuzz_percent_max: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            ease_min: 1.30,
            ease_max: 3.00,
            ease_init: 2.50,
            delta_base: 0.10,
            delta_a: 0.08,
            delta_b: 0.02,
            align_due_at_to_3am: true,
            day_boundary: DayBoundary::Utc,
            enable_fuzz: true,
            fuzz_percent_min: 0.05,
            fuzz_percent_max: 0.15,
        }
    }
}

impl SchedulerConfig {
    /// Parses a (possibly partial) JSON config and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SchedulerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configs the scheduler would produce nonsense with.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("ease_min", self.ease_min),
            ("ease_max", self.ease_max),
            ("ease_init", self.ease_init),
            ("delta_base", self.delta_base),
            ("delta_a", self.delta_a),
            ("delta_b", self.delta_b),
            ("fuzz_percent_min", self.fuzz_percent_min),
            ("fuzz_percent_max", self.fuzz_percent_max),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
        }

        if self.ease_min <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "ease_min must be positive, got {}",
                self.ease_min
            )));
        }
        if self.ease_min > self.ease_max {
            return Err(Error::InvalidConfig(format!(
                "ease_min ({}) is greater than ease_max ({})",
                self.ease_min, self.ease_max
            )));
        }
        if !(self.ease_min..=self.ease_max).contains(&self.ease_init) {
            return Err(Error::InvalidConfig(format!(
                "ease_init ({}) is outside [{}, {}]",
                self.ease_init, self.ease_min, self.ease_max
            )));
        }

        for (name, value) in [
            ("fuzz_percent_min", self.fuzz_percent_min),
            ("fuzz_percent_max", self.fuzz_percent_max),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.fuzz_percent_min > self.fuzz_percent_max {
            return Err(Error::InvalidConfig(format!(
                "fuzz_percent_min ({}) is greater than fuzz_percent_max ({})",
                self.fuzz_percent_min, self.fuzz_percent_max
            )));
        }

        Ok(())
    }
}

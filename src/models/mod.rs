pub mod answer;
pub mod config;
pub mod review_log;
pub mod review_state;
pub mod sm2;

pub use answer::AnswerButton;
pub use config::{DayBoundary, SchedulerConfig};
pub use review_log::ReviewLogEntry;
pub use review_state::{Phase, ReviewState};

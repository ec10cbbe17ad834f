//! Mapping from answer buttons to SM-2 grades, plus interval labels.
//!
//! Grades run 0-5 (0 = complete blackout, 5 = perfect response); the study
//! screen only offers a few buttons, each pinned to one grade.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerButton {
    Again,
    Hard,
    Medium,
    Easy,
}

impl AnswerButton {
    pub const ALL: [AnswerButton; 4] = [
        AnswerButton::Again,
        AnswerButton::Hard,
        AnswerButton::Medium,
        AnswerButton::Easy,
    ];

    pub fn grade(self) -> i32 {
        match self {
            AnswerButton::Again => 1,
            AnswerButton::Hard => 3,
            AnswerButton::Medium => 4,
            AnswerButton::Easy => 5,
        }
    }

    /// Maps a 1-based button index (1 = Again .. 4 = Easy).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(AnswerButton::Again),
            2 => Some(AnswerButton::Hard),
            3 => Some(AnswerButton::Medium),
            4 => Some(AnswerButton::Easy),
            _ => None,
        }
    }
}

/// Formats an interval in days as a short label ("now", "3d", "2w", "1y").
pub fn format_interval(days: i32) -> String {
    match days {
        i32::MIN..=0 => "now".to_string(),
        1..=6 => format!("{days}d"),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}

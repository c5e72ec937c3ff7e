use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// File-name prefix carrying the outcome: `+` for correct, `-` for
    /// incorrect.
    pub fn sigil(self) -> char {
        match self {
            Verdict::Correct => '+',
            Verdict::Incorrect => '-',
        }
    }

    /// Integer form stored in the result store (1 correct, 0 incorrect).
    pub fn flag(self) -> i64 {
        match self {
            Verdict::Correct => 1,
            Verdict::Incorrect => 0,
        }
    }

    pub fn from_flag(flag: i64) -> Self {
        if flag != 0 {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Correct => "Correct",
            Verdict::Incorrect => "Incorrect",
        })
    }
}

/// One graded attempt as persisted in the result store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// RFC 3339 UTC timestamp taken when the attempt was graded.
    pub timestamp: String,
    pub task_id: u32,
    pub topic_id: u32,
    pub outcome: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_flag_round_trip() {
        assert_eq!(Verdict::from_flag(Verdict::Correct.flag()), Verdict::Correct);
        assert_eq!(Verdict::from_flag(Verdict::Incorrect.flag()), Verdict::Incorrect);
        assert_eq!(Verdict::from_flag(7), Verdict::Correct);
    }

    #[test]
    fn verdict_display_and_sigil() {
        assert_eq!(Verdict::Correct.to_string(), "Correct");
        assert_eq!(Verdict::Incorrect.to_string(), "Incorrect");
        assert_eq!(Verdict::Correct.sigil(), '+');
        assert_eq!(Verdict::Incorrect.sigil(), '-');
    }
}

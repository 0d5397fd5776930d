use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rounds in every interview.
pub const MAX_ROUNDS: usize = 5;

/// Answers treated as "no usable answer was given". Compared case-insensitively.
pub const SENTINEL_ANSWERS: [&str; 4] = ["skipped", "timeout", "unclear", "no_speech_detected"];

/// Literal answer submitted when a candidate skips a question.
pub const SKIPPED_ANSWER: &str = "Skipped";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Plumber,
    Electrician,
}

impl JobType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Plumber, Self::Electrician]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Plumber => "Plumber",
            Self::Electrician => "Electrician",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobType {
    type Err = InterviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plumber" => Ok(Self::Plumber),
            "electrician" => Ok(Self::Electrician),
            _ => Err(InterviewError::UnknownJobType(value.to_string())),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Next level up; `Hard` is the ceiling.
    pub const fn promoted(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium | Self::Hard => Self::Hard,
        }
    }

    /// Next level down; `Easy` is the floor.
    pub const fn demoted(self) -> Self {
        match self {
            Self::Hard => Self::Medium,
            Self::Medium | Self::Easy => Self::Easy,
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DifficultyLevel {
    type Err = InterviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(InterviewError::UnknownDifficulty(value.to_string())),
        }
    }
}

/// Coarse bucket used only to drive difficulty transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerQuality {
    Poor,
    Average,
    Good,
}

impl AnswerQuality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Average => "Average",
            Self::Good => "Good",
        }
    }
}

/// One question/answer/score cycle. Never mutated after it is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
    pub difficulty: DifficultyLevel,
    pub score: f64,
}

/// True when the answer carries no usable content.
pub fn is_sentinel_answer(answer: &str) -> bool {
    let trimmed = answer.trim();
    trimmed.is_empty()
        || SENTINEL_ANSWERS
            .iter()
            .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

/// Rounds the exact binary value to one decimal, so 0.15 (stored just below)
/// becomes 0.1 rather than 0.2.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterviewError {
    #[error("unknown job type '{0}' (expected Plumber or Electrician)")]
    UnknownJobType(String),
    #[error("unknown difficulty '{0}' (expected easy, medium, or hard)")]
    UnknownDifficulty(String),
    #[error("interview already has {max_rounds} answered rounds")]
    SessionComplete { max_rounds: usize },
    #[error("no questions configured for {job_type} at {difficulty} difficulty")]
    EmptyQuestionBank {
        job_type: JobType,
        difficulty: DifficultyLevel,
    },
    #[error("interview is still in progress ({answered} of {max_rounds} rounds answered)")]
    SessionInProgress { answered: usize, max_rounds: usize },
}

use super::domain::{AnswerQuality, DifficultyLevel};
use serde::{Deserialize, Serialize};

/// Three-state difficulty ladder. Starts at medium and only moves on quality feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifficultyController {
    current: DifficultyLevel,
}

impl DifficultyController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(current: DifficultyLevel) -> Self {
        Self { current }
    }

    pub fn current(&self) -> DifficultyLevel {
        self.current
    }

    /// Applies one transition and returns the new level.
    pub fn advance(&mut self, quality: AnswerQuality) -> DifficultyLevel {
        self.current = next_difficulty(self.current, quality);
        self.current
    }
}

pub fn next_difficulty(current: DifficultyLevel, quality: AnswerQuality) -> DifficultyLevel {
    match quality {
        AnswerQuality::Good => current.promoted(),
        AnswerQuality::Poor => current.demoted(),
        AnswerQuality::Average => current,
    }
}

use super::super::domain::DifficultyLevel;
use serde::{Deserialize, Serialize};

/// Weights and thresholds of the keyword rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub high_value_weight: f64,
    pub medium_value_weight: f64,
    pub basic_value_weight: f64,
    /// Answers shorter than this many words are scaled down proportionally.
    pub target_word_count: usize,
    /// Word count an answer must exceed to earn the completeness bonus.
    pub bonus_word_threshold: usize,
    pub completeness_bonus: f64,
    pub max_score: f64,
    pub easy_multiplier: f64,
    pub medium_multiplier: f64,
    pub hard_multiplier: f64,
    /// Trimmed answers shorter than this many characters always classify as poor.
    pub min_answer_chars: usize,
    pub good_threshold: f64,
    pub average_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            high_value_weight: 3.0,
            medium_value_weight: 2.0,
            basic_value_weight: 1.0,
            target_word_count: 20,
            bonus_word_threshold: 30,
            completeness_bonus: 1.0,
            max_score: 10.0,
            easy_multiplier: 0.8,
            medium_multiplier: 1.0,
            hard_multiplier: 1.2,
            min_answer_chars: 10,
            good_threshold: 7.0,
            average_threshold: 4.0,
        }
    }
}

impl ScoringConfig {
    pub fn difficulty_multiplier(&self, difficulty: DifficultyLevel) -> f64 {
        match difficulty {
            DifficultyLevel::Easy => self.easy_multiplier,
            DifficultyLevel::Medium => self.medium_multiplier,
            DifficultyLevel::Hard => self.hard_multiplier,
        }
    }
}

mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;

use super::catalog::InterviewCatalog;
use super::domain::{AnswerQuality, DifficultyLevel, JobType};
use serde::{Deserialize, Serialize};

/// Stateless scorer that applies the keyword rubric to free-text answers.
#[derive(Debug, Clone)]
pub struct AnswerScorer {
    catalog: &'static InterviewCatalog,
    config: ScoringConfig,
}

impl AnswerScorer {
    pub fn new(catalog: &'static InterviewCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    /// Scorer over the built-in catalog with the default rubric.
    pub fn standard() -> Self {
        Self::new(InterviewCatalog::standard(), ScoringConfig::default())
    }

    pub fn catalog(&self) -> &'static InterviewCatalog {
        self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score in `[0, 10]`, rounded to one decimal.
    pub fn score(&self, answer: &str, difficulty: DifficultyLevel, job_type: JobType) -> f64 {
        self.breakdown(answer, difficulty, job_type).score
    }

    pub fn breakdown(
        &self,
        answer: &str,
        difficulty: DifficultyLevel,
        job_type: JobType,
    ) -> ScoreBreakdown {
        rules::score_answer(
            answer,
            job_type,
            difficulty,
            self.catalog.keywords(job_type, difficulty),
            &self.config,
        )
    }

    pub fn classify(&self, answer: &str, score: f64) -> AnswerQuality {
        policy::classify_quality(answer, score, &self.config)
    }
}

/// Audit trail of how a single answer was scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub job_type: JobType,
    pub difficulty: DifficultyLevel,
    /// The answer was empty or one of the "no usable answer" sentinels.
    pub sentinel: bool,
    pub high_value_matches: Vec<String>,
    pub medium_value_matches: Vec<String>,
    pub basic_value_matches: Vec<String>,
    pub keyword_score: f64,
    pub word_count: usize,
    pub length_multiplier: f64,
    pub base_score: f64,
    pub bonus_applied: bool,
    pub difficulty_multiplier: f64,
    pub score: f64,
}

impl ScoreBreakdown {
    fn empty(job_type: JobType, difficulty: DifficultyLevel) -> Self {
        Self {
            job_type,
            difficulty,
            sentinel: false,
            high_value_matches: Vec::new(),
            medium_value_matches: Vec::new(),
            basic_value_matches: Vec::new(),
            keyword_score: 0.0,
            word_count: 0,
            length_multiplier: 0.0,
            base_score: 0.0,
            bonus_applied: false,
            difficulty_multiplier: 1.0,
            score: 0.0,
        }
    }

    pub fn matched_keywords(&self) -> usize {
        self.high_value_matches.len() + self.medium_value_matches.len() + self.basic_value_matches.len()
    }
}

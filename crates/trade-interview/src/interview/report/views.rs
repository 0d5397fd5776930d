use super::super::domain::{DifficultyLevel, JobType};
use super::super::session::Grade;
use chrono::NaiveDate;
use serde::Serialize;

/// Four-step rating shown per round in reports. Finer than the classifier
/// that drives difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundRating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl RoundRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackLevel {
    Excellent,
    Good,
    NeedsReview,
}

impl FeedbackLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent performance! You demonstrate strong technical knowledge and communication skills.",
            Self::Good => "Good performance! With some additional preparation, you'll be well-prepared for the role.",
            Self::NeedsReview => "Consider reviewing technical concepts for this field to improve your interview performance.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundBreakdownEntry {
    pub round: usize,
    pub question: String,
    pub answer: String,
    pub difficulty: DifficultyLevel,
    pub difficulty_label: &'static str,
    pub score: f64,
    pub rating: RoundRating,
    pub rating_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewDetails {
    pub job_type: JobType,
    pub job_label: &'static str,
    pub date: NaiveDate,
    pub duration_seconds: i64,
    pub duration_label: String,
    pub questions_asked: usize,
    pub total_points: f64,
    pub max_possible: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub grade_label: &'static str,
    pub average_per_question: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceAnalysis {
    pub strengths: &'static str,
    pub areas_for_improvement: &'static str,
}

impl PerformanceAnalysis {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 70.0 {
            Self {
                strengths: "Good technical knowledge",
                areas_for_improvement: "Continue building on strong foundation",
            }
        } else {
            Self {
                strengths: "Room for improvement in technical areas",
                areas_for_improvement: "Focus on technical terminology and detailed explanations",
            }
        }
    }
}

/// "4m 05s" style rendering of an elapsed time in seconds.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}m {:02}s", seconds / 60, seconds % 60)
}

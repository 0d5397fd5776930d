use super::super::domain::AnswerQuality;
use super::config::ScoringConfig;

/// Buckets a scored answer. Very short answers are poor whatever their score.
pub(crate) fn classify_quality(answer: &str, score: f64, config: &ScoringConfig) -> AnswerQuality {
    if answer.trim().chars().count() < config.min_answer_chars {
        return AnswerQuality::Poor;
    }

    if score >= config.good_threshold {
        AnswerQuality::Good
    } else if score >= config.average_threshold {
        AnswerQuality::Average
    } else {
        AnswerQuality::Poor
    }
}

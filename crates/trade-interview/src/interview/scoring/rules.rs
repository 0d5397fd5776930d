use super::super::catalog::KeywordTiers;
use super::super::domain::{is_sentinel_answer, round_to_tenth, DifficultyLevel, JobType};
use super::config::ScoringConfig;
use super::ScoreBreakdown;

pub(crate) fn score_answer(
    answer: &str,
    job_type: JobType,
    difficulty: DifficultyLevel,
    tiers: Option<&KeywordTiers>,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let difficulty_multiplier = config.difficulty_multiplier(difficulty);

    if is_sentinel_answer(answer) {
        return ScoreBreakdown {
            sentinel: true,
            difficulty_multiplier,
            ..ScoreBreakdown::empty(job_type, difficulty)
        };
    }

    // Substring matching: "water hammer" and "water" both count when present.
    let answer_lower = answer.to_lowercase();
    let matched = |keywords: &[String]| -> Vec<String> {
        keywords
            .iter()
            .filter(|keyword| answer_lower.contains(keyword.as_str()))
            .cloned()
            .collect()
    };

    let (high_value_matches, medium_value_matches, basic_value_matches) = match tiers {
        Some(tiers) => (
            matched(&tiers.high_value),
            matched(&tiers.medium_value),
            matched(&tiers.basic_value),
        ),
        None => (Vec::new(), Vec::new(), Vec::new()),
    };

    let keyword_score = high_value_matches.len() as f64 * config.high_value_weight
        + medium_value_matches.len() as f64 * config.medium_value_weight
        + basic_value_matches.len() as f64 * config.basic_value_weight;

    let word_count = answer.split_whitespace().count();
    let length_multiplier = if config.target_word_count == 0 {
        1.0
    } else {
        (word_count as f64 / config.target_word_count as f64).min(1.0)
    };

    let mut base_score = (keyword_score * length_multiplier).min(config.max_score);

    let bonus_applied = word_count > config.bonus_word_threshold && !high_value_matches.is_empty();
    if bonus_applied {
        base_score = (base_score + config.completeness_bonus).min(config.max_score);
    }

    let score = round_to_tenth((base_score * difficulty_multiplier).min(config.max_score));

    ScoreBreakdown {
        job_type,
        difficulty,
        sentinel: false,
        high_value_matches,
        medium_value_matches,
        basic_value_matches,
        keyword_score,
        word_count,
        length_multiplier,
        base_score,
        bonus_applied,
        difficulty_multiplier,
        score,
    }
}

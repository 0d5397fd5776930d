use super::common::{STRONG_PLUMBER_ANSWER, WEAK_ANSWER};
use crate::interview::catalog::InterviewCatalog;
use crate::interview::domain::{AnswerQuality, DifficultyLevel, JobType};
use crate::interview::scoring::AnswerScorer;

fn on_tenth_grid(score: f64) -> bool {
    ((score * 10.0).round() - score * 10.0).abs() < 1e-9
}

#[test]
fn scores_the_reference_plumber_answer() {
    let scorer = AnswerScorer::standard();
    let breakdown = scorer.breakdown(
        "You turn off the main water valve to stop a leak",
        DifficultyLevel::Easy,
        JobType::Plumber,
    );

    assert_eq!(breakdown.high_value_matches, vec!["water".to_string()]);
    assert_eq!(
        breakdown.medium_value_matches,
        vec!["valve".to_string(), "leak".to_string()]
    );
    assert_eq!(
        breakdown.basic_value_matches,
        vec!["turn".to_string(), "off".to_string(), "main".to_string()]
    );
    assert_eq!(breakdown.keyword_score, 10.0);
    assert_eq!(breakdown.word_count, 11);
    assert!(!breakdown.bonus_applied);
    assert_eq!(breakdown.score, 4.4);
}

#[test]
fn sentinels_and_blank_answers_score_zero_everywhere() {
    let scorer = AnswerScorer::standard();
    let answers = ["", "   ", "skipped", "Skipped", "TIMEOUT", "unclear", "no_speech_detected"];

    for job_type in JobType::ordered() {
        for difficulty in DifficultyLevel::ordered() {
            for answer in answers {
                let breakdown = scorer.breakdown(answer, difficulty, job_type);
                assert!(breakdown.sentinel, "{answer:?} should be a sentinel");
                assert_eq!(breakdown.score, 0.0);
                assert_eq!(breakdown.matched_keywords(), 0);
            }
        }
    }
}

#[test]
fn scores_stay_in_range_and_on_the_grid() {
    let scorer = AnswerScorer::standard();
    let catalog = InterviewCatalog::standard();

    for job_type in JobType::ordered() {
        for difficulty in DifficultyLevel::ordered() {
            let tiers = catalog
                .keywords(job_type, difficulty)
                .expect("keyword partition present");
            let stuffed = tiers
                .high_value
                .iter()
                .chain(&tiers.medium_value)
                .chain(&tiers.basic_value)
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");

            for answer in [stuffed.as_str(), STRONG_PLUMBER_ANSWER, WEAK_ANSWER, "pipe"] {
                let score = scorer.score(answer, difficulty, job_type);
                assert!((0.0..=10.0).contains(&score), "{score} out of range");
                assert!(on_tenth_grid(score), "{score} not rounded to a tenth");
            }
        }
    }
}

#[test]
fn keyword_matching_ignores_case() {
    let scorer = AnswerScorer::standard();
    let breakdown = scorer.breakdown(
        "The difference is AC alternates while DC flows in one direction",
        DifficultyLevel::Easy,
        JobType::Electrician,
    );

    assert_eq!(
        breakdown.high_value_matches,
        vec!["ac".to_string(), "dc".to_string(), "direct".to_string()]
    );
    assert_eq!(breakdown.basic_value_matches, vec!["difference".to_string()]);
    assert_eq!(breakdown.score, 4.4);
}

#[test]
fn keywords_listed_in_two_tiers_count_twice() {
    let scorer = AnswerScorer::standard();
    let breakdown = scorer.breakdown(
        "Safety first always when working on live panels",
        DifficultyLevel::Easy,
        JobType::Electrician,
    );

    assert!(breakdown.high_value_matches.contains(&"safety".to_string()));
    assert!(breakdown.medium_value_matches.contains(&"safety".to_string()));
    assert_eq!(breakdown.keyword_score, 6.0);
    assert_eq!(breakdown.score, 1.9);
}

#[test]
fn repeated_keywords_count_once() {
    let scorer = AnswerScorer::standard();
    let once = scorer.breakdown("water", DifficultyLevel::Easy, JobType::Plumber);
    let thrice = scorer.breakdown("water water water", DifficultyLevel::Easy, JobType::Plumber);

    assert_eq!(once.keyword_score, 3.0);
    assert_eq!(thrice.keyword_score, 3.0);
}

#[test]
fn long_answers_with_a_high_value_term_earn_the_bonus() {
    let scorer = AnswerScorer::standard();
    let answer = "water is what I would look at first and then I would go step by step through \
everything else that could be going on in the house before I call anyone else for help today";
    let breakdown = scorer.breakdown(answer, DifficultyLevel::Easy, JobType::Plumber);

    assert_eq!(breakdown.word_count, 35);
    assert_eq!(breakdown.length_multiplier, 1.0);
    assert!(breakdown.bonus_applied);
    assert_eq!(breakdown.base_score, 4.0);
    assert_eq!(breakdown.score, 3.2);
}

#[test]
fn difficulty_multiplier_scales_and_caps() {
    let scorer = AnswerScorer::standard();

    assert_eq!(
        scorer.score(STRONG_PLUMBER_ANSWER, DifficultyLevel::Easy, JobType::Plumber),
        8.0
    );
    assert_eq!(
        scorer.score(STRONG_PLUMBER_ANSWER, DifficultyLevel::Medium, JobType::Plumber),
        10.0
    );
    assert_eq!(
        scorer.score(STRONG_PLUMBER_ANSWER, DifficultyLevel::Hard, JobType::Plumber),
        10.0
    );
}

#[test]
fn classifies_by_score_and_length() {
    let scorer = AnswerScorer::standard();

    assert_eq!(scorer.classify(STRONG_PLUMBER_ANSWER, 7.0), AnswerQuality::Good);
    assert_eq!(scorer.classify(STRONG_PLUMBER_ANSWER, 6.9), AnswerQuality::Average);
    assert_eq!(scorer.classify(STRONG_PLUMBER_ANSWER, 4.0), AnswerQuality::Average);
    assert_eq!(scorer.classify(WEAK_ANSWER, 3.9), AnswerQuality::Poor);
    assert_eq!(scorer.classify("   P-trap   ", 9.0), AnswerQuality::Poor);
}

/// `lead` followed by filler words that match no plumber keyword.
fn padded_answer(lead: &str, words: usize) -> String {
    std::iter::once(lead)
        .chain(std::iter::repeat("step").take(words - 1))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn ties_round_on_the_stored_value() {
    let scorer = AnswerScorer::standard();
    let breakdown = scorer.breakdown("it is failing", DifficultyLevel::Medium, JobType::Plumber);

    assert_eq!(breakdown.basic_value_matches, vec!["failing".to_string()]);
    assert_eq!(breakdown.keyword_score, 1.0);
    assert_eq!(breakdown.word_count, 3);
    assert_eq!(breakdown.score, 0.1);
}

#[test]
fn length_multiplier_saturates_at_twenty_words() {
    let scorer = AnswerScorer::standard();

    let twenty = scorer.breakdown(
        &padded_answer("valve", 20),
        DifficultyLevel::Easy,
        JobType::Plumber,
    );
    assert_eq!(twenty.word_count, 20);
    assert_eq!(twenty.length_multiplier, 1.0);
    assert_eq!(twenty.score, 1.6);

    let nineteen = scorer.breakdown(
        &padded_answer("valve", 19),
        DifficultyLevel::Easy,
        JobType::Plumber,
    );
    assert_eq!(nineteen.length_multiplier, 0.95);
    assert_eq!(nineteen.score, 1.5);
}

#[test]
fn bonus_needs_more_than_thirty_words() {
    let scorer = AnswerScorer::standard();

    let thirty = scorer.breakdown(
        &padded_answer("water", 30),
        DifficultyLevel::Easy,
        JobType::Plumber,
    );
    assert_eq!(thirty.word_count, 30);
    assert!(!thirty.bonus_applied);
    assert_eq!(thirty.score, 2.4);

    let thirty_one = scorer.breakdown(
        &padded_answer("water", 31),
        DifficultyLevel::Easy,
        JobType::Plumber,
    );
    assert!(thirty_one.bonus_applied);
    assert_eq!(thirty_one.score, 3.2);
}

#[test]
fn bonus_needs_a_high_value_term() {
    let scorer = AnswerScorer::standard();
    let breakdown = scorer.breakdown(
        &padded_answer("valve", 35),
        DifficultyLevel::Easy,
        JobType::Plumber,
    );

    assert_eq!(breakdown.word_count, 35);
    assert!(breakdown.high_value_matches.is_empty());
    assert_eq!(breakdown.medium_value_matches, vec!["valve".to_string()]);
    assert!(!breakdown.bonus_applied);
    assert_eq!(breakdown.base_score, 2.0);
    assert_eq!(breakdown.score, 1.6);
}

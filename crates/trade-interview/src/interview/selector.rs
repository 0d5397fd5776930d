use super::catalog::InterviewCatalog;
use super::domain::{DifficultyLevel, JobType, MAX_ROUNDS};

/// Question for `round_index` at the given difficulty, or `None` once the interview is over.
///
/// Wraps around banks shorter than the round count. Does not track what was
/// already asked, so a question can repeat when a level is revisited.
pub fn next_question(
    catalog: &InterviewCatalog,
    job_type: JobType,
    difficulty: DifficultyLevel,
    round_index: usize,
) -> Option<&'static str> {
    if round_index >= MAX_ROUNDS {
        return None;
    }

    let questions = catalog.questions(job_type, difficulty);
    if questions.is_empty() {
        return None;
    }

    Some(questions[round_index % questions.len()])
}

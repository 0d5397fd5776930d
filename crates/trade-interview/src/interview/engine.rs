use super::domain::{
    AnswerQuality, AnswerRecord, DifficultyLevel, InterviewError, JobType, MAX_ROUNDS,
    SKIPPED_ANSWER,
};
use super::scoring::{AnswerScorer, ScoreBreakdown};
use super::selector::next_question;
use super::session::{InterviewSession, ScoreSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Drives the round loop: select, score, classify, transition, record.
///
/// Sessions are values: each round takes the current session by reference and
/// hands back the next one, leaving the input untouched if the round is rejected.
#[derive(Debug, Clone)]
pub struct InterviewEngine {
    scorer: AnswerScorer,
}

impl InterviewEngine {
    pub fn new(scorer: AnswerScorer) -> Self {
        Self { scorer }
    }

    pub fn standard() -> Self {
        Self::new(AnswerScorer::standard())
    }

    pub fn scorer(&self) -> &AnswerScorer {
        &self.scorer
    }

    pub fn start(&self, job_type: JobType, now: DateTime<Utc>) -> InterviewSession {
        info!(job_type = job_type.label(), "interview started");
        InterviewSession::new(job_type, now)
    }

    /// Question to ask next, or `None` once every round is recorded.
    pub fn current_question(&self, session: &InterviewSession) -> Option<&'static str> {
        next_question(
            self.scorer.catalog(),
            session.job_type(),
            session.current_difficulty(),
            session.round_index(),
        )
    }

    pub fn process_round(
        &self,
        session: &InterviewSession,
        answer: &str,
        now: DateTime<Utc>,
    ) -> Result<(InterviewSession, RoundOutcome), InterviewError> {
        if session.is_complete() {
            return Err(InterviewError::SessionComplete {
                max_rounds: MAX_ROUNDS,
            });
        }

        let question =
            self.current_question(session)
                .ok_or_else(|| InterviewError::EmptyQuestionBank {
                    job_type: session.job_type(),
                    difficulty: session.current_difficulty(),
                })?;

        let difficulty = session.current_difficulty();
        let breakdown = self
            .scorer
            .breakdown(answer, difficulty, session.job_type());
        let quality = self.scorer.classify(answer, breakdown.score);

        let mut next = session.clone();
        let record = next
            .record_round(question, answer, difficulty, breakdown.score)?
            .clone();
        let next_difficulty = next.advance_difficulty(quality);

        debug!(
            round = next.round_index(),
            score = record.score,
            quality = quality.label(),
            from = difficulty.label(),
            to = next_difficulty.label(),
            "round processed"
        );

        let summary = if next.is_complete() {
            next.finish(now);
            let summary = next.finalize();
            info!(
                job_type = next.job_type().label(),
                percentage = summary.percentage,
                grade = summary.grade.label(),
                "interview completed"
            );
            Some(summary)
        } else {
            None
        };

        let outcome = RoundOutcome {
            round: next.round_index(),
            record,
            quality,
            breakdown,
            next_difficulty,
            next_question: self.current_question(&next).map(str::to_string),
            completed: next.is_complete(),
            summary,
        };

        Ok((next, outcome))
    }

    /// Records the round with the literal "Skipped" answer, which scores zero.
    pub fn skip_round(
        &self,
        session: &InterviewSession,
        now: DateTime<Utc>,
    ) -> Result<(InterviewSession, RoundOutcome), InterviewError> {
        self.process_round(session, SKIPPED_ANSWER, now)
    }
}

/// Result of one processed round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundOutcome {
    /// 1-based number of the round just recorded.
    pub round: usize,
    pub record: AnswerRecord,
    pub quality: AnswerQuality,
    pub breakdown: ScoreBreakdown,
    pub next_difficulty: DifficultyLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScoreSummary>,
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use super::domain::{AnswerQuality, DifficultyLevel, InterviewError, JobType, SKIPPED_ANSWER};
use super::engine::{InterviewEngine, RoundOutcome};
use super::report::{InterviewReport, ReportError, ReportFormat};
use super::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use super::scoring::ScoreBreakdown;

/// Service composing the round engine with session storage.
pub struct InterviewService<R> {
    repository: Arc<R>,
    engine: Arc<InterviewEngine>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("itv-{id:06}"))
}

impl<R> InterviewService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: InterviewEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &InterviewEngine {
        &self.engine
    }

    /// Open a new interview and store it with its first question.
    pub fn start(&self, job_type: JobType) -> Result<SessionRecord, InterviewServiceError> {
        let session = self.engine.start(job_type, Utc::now());
        let current_question = self.engine.current_question(&session).map(str::to_string);

        let record = SessionRecord {
            id: next_session_id(),
            session,
            current_question,
        };

        Ok(self.repository.insert(record)?)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, InterviewServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Score the answer to the current question and persist the advanced session.
    pub fn submit_answer(
        &self,
        id: &SessionId,
        answer: &str,
    ) -> Result<RoundOutcome, InterviewServiceError> {
        let mut record = self.get(id)?;
        let expected_round = record.session.round_index();

        let (next, outcome) = self
            .engine
            .process_round(&record.session, answer, Utc::now())?;

        record.session = next;
        record.current_question = outcome.next_question.clone();

        if let Err(err) = self.repository.update(record, expected_round) {
            warn!(session_id = %id, error = %err, "round was not stored");
            return Err(err.into());
        }

        Ok(outcome)
    }

    pub fn skip(&self, id: &SessionId) -> Result<RoundOutcome, InterviewServiceError> {
        self.submit_answer(id, SKIPPED_ANSWER)
    }

    /// Build the assessment for a finished interview.
    pub fn report(&self, id: &SessionId) -> Result<InterviewReport, InterviewServiceError> {
        let record = self.get(id)?;
        Ok(InterviewReport::from_session(&record.session)?)
    }

    pub fn export_report(
        &self,
        id: &SessionId,
        format: ReportFormat,
    ) -> Result<RenderedReport, InterviewServiceError> {
        let report = self.report(id)?;
        let body = report.render(format)?;
        Ok(RenderedReport {
            file_name: report.file_name(format),
            format,
            body,
        })
    }

    /// Stateless scoring of a single answer.
    pub fn score_answer(
        &self,
        job_type: JobType,
        difficulty: DifficultyLevel,
        answer: &str,
    ) -> AnswerAssessment {
        let scorer = self.engine.scorer();
        let breakdown = scorer.breakdown(answer, difficulty, job_type);
        let quality = scorer.classify(answer, breakdown.score);
        AnswerAssessment {
            score: breakdown.score,
            quality,
            breakdown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerAssessment {
    pub score: f64,
    pub quality: AnswerQuality,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub file_name: String,
    pub format: ReportFormat,
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum InterviewServiceError {
    #[error(transparent)]
    Interview(#[from] InterviewError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

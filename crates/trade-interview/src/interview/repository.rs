use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{DifficultyLevel, JobType, MAX_ROUNDS};
use super::session::{InterviewSession, ScoreSummary};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored interview: the session value plus the question currently on the table.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub id: SessionId,
    pub session: InterviewSession,
    pub current_question: Option<String>,
}

impl SessionRecord {
    pub fn status_view(&self) -> SessionStatusView {
        let session = &self.session;
        let complete = session.is_complete();
        SessionStatusView {
            session_id: self.id.clone(),
            job_type: session.job_type(),
            answered: session.round_index(),
            max_rounds: MAX_ROUNDS,
            progress: (!complete).then(|| session.progress_label()),
            current_difficulty: session.current_difficulty(),
            current_question: self.current_question.clone(),
            completed: complete,
            summary: complete.then(|| session.finalize()),
        }
    }
}

/// Storage abstraction so the service can run against any backend.
///
/// `update` is compare-and-set: it applies only while the stored session still
/// has `expected_round` answered rounds, otherwise it reports a conflict.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord, expected_round: usize) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session was modified concurrently")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub job_type: JobType,
    pub answered: usize,
    pub max_rounds: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    pub current_difficulty: DifficultyLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<String>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScoreSummary>,
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::interview::catalog::{InterviewCatalog, KeywordTiers};
use crate::interview::domain::{DifficultyLevel, JobType};
use crate::interview::engine::InterviewEngine;
use crate::interview::repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use crate::interview::scoring::{AnswerScorer, ScoringConfig};
use crate::interview::service::InterviewService;
use crate::interview::session::InterviewSession;

/// Scores as "good" for every plumber difficulty: 8.0 easy, 10.0 medium and hard.
pub(super) const STRONG_PLUMBER_ANSWER: &str = "I would diagnose the problem by checking the flapper, \
chain, and water pressure, then look at hydraulic issues like water hammer, confirm drainage meets \
code with backflow prevention, and inspect every trap, drain, and pipe.";

/// Long enough to classify on score alone, but matches no keyword.
pub(super) const WEAK_ANSWER: &str = "I am honestly not sure about that one";

pub(super) fn started_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn minutes_later(minutes: i64) -> DateTime<Utc> {
    started_at() + chrono::Duration::minutes(minutes)
}

/// Runs a full plumber interview with the given answers, one minute per round.
pub(super) fn completed_session(answers: [&str; 5]) -> InterviewSession {
    let engine = InterviewEngine::standard();
    let mut session = engine.start(JobType::Plumber, started_at());
    for (index, answer) in answers.iter().enumerate() {
        let (next, _) = engine
            .process_round(&session, answer, minutes_later(index as i64 + 1))
            .expect("round accepted");
        session = next;
    }
    session
}

/// Catalog with a two-question medium plumber bank, a one-question easy bank,
/// and two medium keywords.
pub(super) fn short_catalog() -> &'static InterviewCatalog {
    let questions = HashMap::from([
        (
            (JobType::Plumber, DifficultyLevel::Medium),
            vec!["Medium question A?", "Medium question B?"],
        ),
        ((JobType::Plumber, DifficultyLevel::Easy), vec!["Easy question?"]),
    ]);
    let keywords = HashMap::from([(
        (JobType::Plumber, DifficultyLevel::Medium),
        KeywordTiers::new(&["Flange"], &["gasket"], &[]),
    )]);
    Box::leak(Box::new(InterviewCatalog::new(questions, keywords)))
}

pub(super) fn short_catalog_engine() -> InterviewEngine {
    InterviewEngine::new(AnswerScorer::new(short_catalog(), ScoringConfig::default()))
}

pub(super) fn build_service() -> (InterviewService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = InterviewService::new(repository.clone(), InterviewEngine::standard());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord, expected_round: usize) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let stored = guard.get(&record.id).ok_or(RepositoryError::NotFound)?;
        if stored.session.round_index() != expected_round {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Accepts inserts but behaves as if another writer always got there first.
#[derive(Default)]
pub(super) struct RacingRepository {
    inner: MemoryRepository,
}

impl SessionRepository for RacingRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn update(&self, _record: SessionRecord, _expected_round: usize) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        self.inner.fetch(id)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SessionRecord, _expected_round: usize) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}

use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use trade_interview::config::parse_listen_timeout;
use trade_interview::interview::{
    DifficultyLevel, JobType, RepositoryError, SessionId, SessionRecord, SessionRepository,
    VoiceBackendKind,
};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

const DEFAULT_SESSION_CAPACITY: usize = 1024;

/// Process-local session store. Updates only land on the round they were computed from.
///
/// Holds at most `capacity` sessions. When full, finished interviews are evicted
/// oldest first; if every stored interview is still running, new ones are refused.
#[derive(Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
    capacity: usize,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }
}

impl InMemorySessionRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, SessionRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session store poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        if guard.len() >= self.capacity {
            let excess = guard.len() + 1 - self.capacity;
            evict_finished(&mut guard, excess);
        }
        if guard.len() >= self.capacity {
            return Err(RepositoryError::Unavailable(format!(
                "session store full ({} interviews in progress)",
                guard.len()
            )));
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord, expected_round: usize) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        match guard.get(&record.id) {
            Some(stored) if stored.session.round_index() == expected_round => {
                guard.insert(record.id.clone(), record);
                Ok(())
            }
            Some(_) => Err(RepositoryError::Conflict),
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

fn evict_finished(records: &mut HashMap<SessionId, SessionRecord>, count: usize) {
    let mut finished: Vec<_> = records
        .iter()
        .filter_map(|(id, record)| record.session.end_time().map(|end| (end, id.clone())))
        .collect();
    finished.sort_by_key(|(end, _)| *end);

    for (_, id) in finished.into_iter().take(count) {
        debug!(session_id = %id, "evicting finished interview");
        records.remove(&id);
    }
}

pub(crate) fn parse_job_type(raw: &str) -> Result<JobType, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_difficulty(raw: &str) -> Result<DifficultyLevel, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

pub(crate) fn parse_voice_backend(raw: &str) -> Result<VoiceBackendKind, String> {
    raw.parse()
}

pub(crate) fn parse_timeout(raw: &str) -> Result<Duration, String> {
    parse_listen_timeout(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_report_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("report directory must not be empty".to_string());
    }
    Ok(PathBuf::from(trimmed))
}

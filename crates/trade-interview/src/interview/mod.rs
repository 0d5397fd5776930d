//! Adaptive trade interview: keyword scoring, difficulty control, question
//! selection, session aggregation, and report generation.
//!
//! The core (`catalog` through `engine`) is pure and synchronous. The service,
//! repository, and router layers put sessions behind HTTP, and `voice` is the
//! boundary to whatever speaks the questions and captures the answers.

pub mod catalog;
pub mod difficulty;
pub mod domain;
pub mod engine;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod selector;
pub mod service;
pub mod session;
pub mod voice;

#[cfg(test)]
mod tests;

pub use catalog::{InterviewCatalog, KeywordTiers};
pub use difficulty::{next_difficulty, DifficultyController};
pub use domain::{
    is_sentinel_answer, AnswerQuality, AnswerRecord, DifficultyLevel, InterviewError, JobType,
    MAX_ROUNDS, SENTINEL_ANSWERS, SKIPPED_ANSWER,
};
pub use engine::{InterviewEngine, RoundOutcome};
pub use report::{InterviewReport, ReportError, ReportFormat};
pub use repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository, SessionStatusView,
};
pub use router::interview_router;
pub use scoring::{AnswerScorer, ScoreBreakdown, ScoringConfig};
pub use selector::next_question;
pub use service::{AnswerAssessment, InterviewService, InterviewServiceError, RenderedReport};
pub use session::{Grade, InterviewSession, ScoreSummary};
pub use voice::{
    ListenOutcome, ScriptedVoice, SilentVoice, VoiceBackendKind, VoiceError, VoiceGateway, VoiceIo,
};

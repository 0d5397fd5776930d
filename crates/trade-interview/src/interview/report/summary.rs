use super::super::domain::{InterviewError, MAX_ROUNDS};
use super::super::session::{InterviewSession, ScoreSummary};
use super::views::{
    format_duration, FeedbackLevel, InterviewDetails, PerformanceAnalysis, RoundBreakdownEntry,
    RoundRating,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Assessment of a finished interview, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewReport {
    pub title: &'static str,
    pub details: InterviewDetails,
    pub analysis: PerformanceAnalysis,
    pub feedback: FeedbackLevel,
    pub feedback_message: &'static str,
    pub rounds: Vec<RoundBreakdownEntry>,
    #[serde(skip)]
    finished_at: DateTime<Utc>,
}

impl InterviewReport {
    pub fn from_session(session: &InterviewSession) -> Result<Self, InterviewError> {
        let finished_at = match session.end_time() {
            Some(end) if session.is_complete() => end,
            _ => {
                return Err(InterviewError::SessionInProgress {
                    answered: session.round_index(),
                    max_rounds: MAX_ROUNDS,
                })
            }
        };

        let summary = session.finalize();
        let duration_seconds = (finished_at - session.start_time()).num_seconds();

        let rounds = session
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let rating = RoundRating::from_score(record.score);
                RoundBreakdownEntry {
                    round: index + 1,
                    question: record.question.clone(),
                    answer: record.answer.clone(),
                    difficulty: record.difficulty,
                    difficulty_label: record.difficulty.label(),
                    score: record.score,
                    rating,
                    rating_label: rating.label(),
                }
            })
            .collect();

        let feedback = FeedbackLevel::from_percentage(summary.percentage);

        Ok(Self {
            title: "Interview Assessment Report",
            details: details(session, &summary, finished_at, duration_seconds),
            analysis: PerformanceAnalysis::from_percentage(summary.percentage),
            feedback,
            feedback_message: feedback.message(),
            rounds,
            finished_at,
        })
    }

    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// `{Job}_Interview_Report_{YYYYmmdd_HHMMSS}` without an extension.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_Interview_Report_{}",
            self.details.job_label,
            self.finished_at.format("%Y%m%d_%H%M%S")
        )
    }
}

fn details(
    session: &InterviewSession,
    summary: &ScoreSummary,
    finished_at: DateTime<Utc>,
    duration_seconds: i64,
) -> InterviewDetails {
    let job_type = session.job_type();
    InterviewDetails {
        job_type,
        job_label: job_type.label(),
        date: finished_at.date_naive(),
        duration_seconds,
        duration_label: format_duration(duration_seconds),
        questions_asked: summary.rounds,
        total_points: summary.total_points,
        max_possible: summary.max_possible,
        percentage: summary.percentage,
        grade: summary.grade,
        grade_label: summary.grade.label(),
        average_per_question: summary.average_per_question,
    }
}

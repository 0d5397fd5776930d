use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{DifficultyLevel, JobType};
use super::report::ReportFormat;
use super::repository::{SessionId, SessionRepository};
use super::service::InterviewService;
use crate::error::AppError;

/// Router builder exposing interview sessions and stateless scoring.
pub fn interview_router<R>(service: Arc<InterviewService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/interviews", post(start_handler::<R>))
        .route("/api/v1/interviews/:session_id", get(status_handler::<R>))
        .route(
            "/api/v1/interviews/:session_id/answers",
            post(answer_handler::<R>),
        )
        .route("/api/v1/interviews/:session_id/skip", post(skip_handler::<R>))
        .route(
            "/api/v1/interviews/:session_id/report",
            get(report_handler::<R>),
        )
        .route("/api/v1/score", post(score_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartInterviewRequest {
    job_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    #[serde(default)]
    answer: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportQuery {
    format: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    job_type: String,
    difficulty: String,
    #[serde(default)]
    answer: String,
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Json(request): Json<StartInterviewRequest>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let job_type: JobType = request.job_type.parse()?;
    let record = service.start(job_type)?;
    Ok((StatusCode::CREATED, Json(record.status_view())).into_response())
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let record = service.get(&SessionId(session_id))?;
    Ok((StatusCode::OK, Json(record.status_view())).into_response())
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let outcome = service.submit_answer(&SessionId(session_id), &request.answer)?;
    Ok((StatusCode::OK, Json(outcome)).into_response())
}

pub(crate) async fn skip_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let outcome = service.skip(&SessionId(session_id))?;
    Ok((StatusCode::OK, Json(outcome)).into_response())
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let format = match query.format.as_deref() {
        Some(raw) => raw.parse()?,
        None => ReportFormat::default(),
    };

    let rendered = service.export_report(&SessionId(session_id), format)?;
    let content_type = mime_guess::from_ext(format.extension())
        .first_or_octet_stream()
        .to_string();
    let disposition = format!("inline; filename=\"{}\"", rendered.file_name);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.body,
    )
        .into_response())
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Response, AppError>
where
    R: SessionRepository + 'static,
{
    let job_type: JobType = request.job_type.parse()?;
    let difficulty: DifficultyLevel = request.difficulty.parse()?;
    let assessment = service.score_answer(job_type, difficulty, &request.answer);
    Ok((StatusCode::OK, Json(assessment)).into_response())
}

use crate::config::ConfigError;
use crate::interview::{InterviewError, InterviewServiceError, ReportError, RepositoryError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Interview(InterviewServiceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Interview(InterviewServiceError::Interview(err)) => match err {
                InterviewError::UnknownJobType(_) | InterviewError::UnknownDifficulty(_) => {
                    StatusCode::BAD_REQUEST
                }
                InterviewError::SessionComplete { .. }
                | InterviewError::SessionInProgress { .. } => StatusCode::CONFLICT,
                InterviewError::EmptyQuestionBank { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Interview(InterviewServiceError::Repository(err)) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict => StatusCode::CONFLICT,
                RepositoryError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            },
            AppError::Interview(InterviewServiceError::Report(ReportError::UnknownFormat(_))) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Interview(InterviewServiceError::Report(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Interview(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Interview(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<InterviewServiceError> for AppError {
    fn from(value: InterviewServiceError) -> Self {
        Self::Interview(value)
    }
}

impl From<InterviewError> for AppError {
    fn from(value: InterviewError) -> Self {
        Self::Interview(value.into())
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        Self::Interview(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::{DifficultyLevel, JobType};

    #[test]
    fn maps_interview_errors_to_client_statuses() {
        let unknown: AppError = InterviewError::UnknownJobType("Welder".to_string()).into();
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

        let finished: AppError = InterviewError::SessionComplete { max_rounds: 5 }.into();
        assert_eq!(finished.status(), StatusCode::CONFLICT);

        let missing = AppError::Interview(RepositoryError::NotFound.into());
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let bad_format: AppError = ReportError::UnknownFormat("pdf".to_string()).into();
        assert_eq!(bad_format.status(), StatusCode::BAD_REQUEST);

        let empty: AppError = InterviewError::EmptyQuestionBank {
            job_type: JobType::Plumber,
            difficulty: DifficultyLevel::Hard,
        }
        .into();
        assert_eq!(empty.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use trade_interview::interview::{interview_router, InterviewService, SessionRepository};

pub(crate) fn with_interview_routes<R>(service: Arc<InterviewService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    interview_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemorySessionRepository;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;
    use trade_interview::interview::InterviewEngine;

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(InterviewService::new(
            Arc::new(InMemorySessionRepository::default()),
            InterviewEngine::standard(),
        ));
        with_interview_routes(service).layer(Extension(app_state(ready)))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_tracks_the_flag() {
        let waiting = readiness_endpoint(Extension(app_state(false)))
            .await
            .into_response();
        assert_eq!(waiting.status(), StatusCode::SERVICE_UNAVAILABLE);

        let ready = readiness_endpoint(Extension(app_state(true)))
            .await
            .into_response();
        assert_eq!(ready.status(), StatusCode::OK);
        assert_eq!(json_body(ready).await["status"], "ready");
    }

    #[tokio::test]
    async fn metrics_endpoint_serves_prometheus_text() {
        let response = app(true)
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }

    #[tokio::test]
    async fn interview_routes_are_mounted() {
        let router = app(true);

        let created = router
            .clone()
            .oneshot(
                Request::post("/api/v1/interviews")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"job_type":"electrician"}"#))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(created.status(), StatusCode::CREATED);
        let view = json_body(created).await;
        let session_id = view["session_id"].as_str().expect("session id").to_string();
        assert_eq!(
            view["current_question"],
            "How do you wire a three-way switch?"
        );

        let skipped = router
            .clone()
            .oneshot(
                Request::post(format!("/api/v1/interviews/{session_id}/skip"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(skipped.status(), StatusCode::OK);

        let status = router
            .oneshot(
                Request::get(format!("/api/v1/interviews/{session_id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        let view = json_body(status).await;
        assert_eq!(view["answered"], 1);
        assert_eq!(view["current_difficulty"], "easy");
        assert_eq!(view["progress"], "Question 2 of 5");
    }
}

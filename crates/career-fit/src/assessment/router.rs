use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::answers::RawAnswer;
use super::navigation::{LandingPage, Screen};
use super::results::ResultsView;
use super::service::{AssessmentService, AssessmentServiceError};
use super::snapshot::SnapshotStore;

/// Body of `POST /api/v1/assessment/submissions`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRequest {
    pub answers: BTreeMap<String, RawAnswer>,
}

/// Router builder exposing the catalog, submission, and results endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: SnapshotStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment", get(landing_handler))
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route("/api/v1/assessment/submissions", post(submit_handler::<S>))
        .route(
            "/api/v1/assessment/results",
            get(results_handler::<S>).delete(clear_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn landing_handler() -> Response {
    (StatusCode::OK, axum::Json(LandingPage::standard())).into_response()
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    let catalog = service.catalog();
    let payload = json!({
        "count": catalog.count(),
        "questions": catalog.questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    match service.submit(request.answers) {
        Ok(snapshot) => {
            let payload = json!({
                "report": &snapshot.report,
                "results": ResultsView::from_snapshot(&snapshot),
                "redirect": Screen::Results.path(),
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Snapshot(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::MissingAnswers(missing)) => {
            let payload = json!({
                "error": "every question must be answered",
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    match service.latest() {
        Ok(Some(snapshot)) => {
            let view = ResultsView::from_snapshot(&snapshot);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Ok(None) => redirect_to_assessment(),
        Err(error) => {
            warn!(error = %error, "stored results unreadable, redirecting to assessment");
            redirect_to_assessment()
        }
    }
}

pub(crate) async fn clear_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: SnapshotStore + 'static,
{
    match service.reset() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn redirect_to_assessment() -> Response {
    let payload = json!({
        "redirect": Screen::Assessment.path(),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

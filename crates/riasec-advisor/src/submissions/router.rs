use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ResultId, SubmissionRequest};
use super::repository::{RepositoryError, ResultQuery, ResultRepository};
use super::service::{SubmissionError, SubmissionService};

/// Router builder exposing result submission, lookup and search.
pub fn results_router<R>(service: Arc<SubmissionService<R>>) -> Router
where
    R: ResultRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/results",
            post(submit_handler::<R>).get(search_handler::<R>),
        )
        .route("/api/v1/results/:result_id", get(result_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match service.submit(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(SubmissionError::Invalid(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "result already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    Path(result_id): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
{
    let id = ResultId(result_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(SubmissionError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "result not found",
                "result_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<SubmissionService<R>>>,
    Query(query): Query<ResultQuery>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match service.search(&query) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: SubmissionError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use riasec_advisor::catalog::CatalogProvider;
use riasec_advisor::holland::{ExamGroup, HollandCode, Major, Question};
use riasec_advisor::submissions::{results_router, ResultRepository, SubmissionService};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// One questionnaire page: every question measuring a single Holland type.
#[derive(Debug, Serialize)]
pub(crate) struct QuestionGroupView {
    pub(crate) code: HollandCode,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
    pub(crate) questions: Vec<Question>,
}

pub(crate) fn with_catalog_routes<R>(service: Arc<SubmissionService<R>>) -> axum::Router
where
    R: ResultRepository + 'static,
{
    results_router(service)
        .route("/api/v1/questions", get(questions_endpoint))
        .route("/api/v1/majors", get(majors_endpoint))
        .route("/api/v1/exam-groups", get(exam_groups_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
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

pub(crate) async fn questions_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<QuestionGroupView>> {
    let groups = state
        .catalog
        .questions_by_category()
        .into_iter()
        .map(|(code, questions)| QuestionGroupView {
            code,
            label: code.label(),
            description: code.description(),
            questions: questions.into_iter().cloned().collect(),
        })
        .collect();
    Json(groups)
}

pub(crate) async fn majors_endpoint(Extension(state): Extension<AppState>) -> Json<Vec<Major>> {
    Json(state.catalog.majors().to_vec())
}

pub(crate) async fn exam_groups_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<ExamGroup>> {
    Json(state.catalog.exam_groups().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryResultRepository;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use riasec_advisor::catalog::Catalog;
    use riasec_advisor::holland::{MatchOptions, RecommendationEngine};
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let catalog = Arc::new(Catalog::standard());
        let engine = Arc::new(RecommendationEngine::new(
            catalog.clone(),
            MatchOptions::default(),
        ));
        let service = Arc::new(SubmissionService::new(
            Arc::new(InMemoryResultRepository::default()),
            engine,
            5,
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            catalog,
        };
        with_catalog_routes(service).layer(Extension(state))
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let value = serde_json::from_slice(&bytes).expect("json body");
        (status, value)
    }

    #[tokio::test]
    async fn questions_are_grouped_in_canonical_order() {
        let (status, body) = get_json(app(true), "/api/v1/questions").await;

        assert_eq!(status, StatusCode::OK);
        let codes: Vec<&str> = body
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|group| group["code"].as_str())
            .collect();
        assert_eq!(codes, vec!["R", "I", "A", "S", "E", "C"]);
        assert_eq!(body[0]["questions"].as_array().map(Vec::len), Some(10));
    }

    #[tokio::test]
    async fn catalog_listings_are_served() {
        let (status, majors) = get_json(app(true), "/api/v1/majors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(majors.as_array().map(Vec::len), Some(30));

        let (status, groups) = get_json(app(true), "/api/v1/exam-groups").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(groups[0]["code"], "A00");
    }

    #[tokio::test]
    async fn readiness_reflects_startup_state() {
        let (status, body) = get_json(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, body) = get_json(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn results_routes_are_mounted() {
        let (status, body) = get_json(app(true), "/api/v1/results").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }
}

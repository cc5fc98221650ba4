use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryResultRepository};
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use riasec_advisor::catalog::CatalogProvider;
use riasec_advisor::config::AppConfig;
use riasec_advisor::error::AppError;
use riasec_advisor::holland::RecommendationEngine;
use riasec_advisor::submissions::SubmissionService;
use riasec_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let catalog = Arc::new(load_catalog(config.advisor.catalog_dir.as_deref())?);
    info!(
        questions = catalog.questions().len(),
        majors = catalog.majors().len(),
        exam_groups = catalog.exam_groups().len(),
        "catalog loaded"
    );

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: catalog.clone(),
    };

    let engine = Arc::new(RecommendationEngine::new(
        catalog,
        config.advisor.match_options(),
    ));
    let repository = Arc::new(InMemoryResultRepository::default());
    let submission_service = Arc::new(SubmissionService::new(
        repository,
        engine,
        config.advisor.major_display_limit,
    ));

    let app = with_catalog_routes(submission_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "riasec advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

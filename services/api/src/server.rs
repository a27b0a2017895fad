use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryBookingRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use detailing::config::AppConfig;
use detailing::error::AppError;
use detailing::telemetry;
use detailing::workflows::assessment::{RecommendationEngine, Section};
use detailing::workflows::bookings::BookingService;
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

    let catalog = config.assessment.load_catalog()?;
    let catalog_source = config
        .assessment
        .catalog_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(
        source = %catalog_source,
        interior_questions = catalog.questions(Section::Interior).len(),
        exterior_questions = catalog.questions(Section::Exterior).len(),
        "assessment catalog loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let booking_service = Arc::new(BookingService::new(
        Arc::new(InMemoryBookingRepository::default()),
        *catalog.prices(),
    ));
    let engine = Arc::new(RecommendationEngine::new(catalog));

    let app = with_service_routes(engine, booking_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "detailing assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

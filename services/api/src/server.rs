use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySubmissionGateway, RecordingNotifier};
use crate::routes::registration_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use donor_intake::config::AppConfig;
use donor_intake::error::AppError;
use donor_intake::telemetry;
use donor_intake::workflows::registration::RegistrationService;
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
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let gateway = Arc::new(InMemorySubmissionGateway::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let registration_service = Arc::new(RegistrationService::new(gateway, notifier));

    let app = registration_routes(registration_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "donor intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use fleet_ai::config::AppConfig;
use fleet_ai::error::AppError;
use fleet_ai::fleet::dispatch::{DispatchService, GeminiClient};
use fleet_ai::fleet::sample::sample_fleet;
use fleet_ai::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_fleet_routes;

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

    let gateway = Arc::new(GeminiClient::new(config.gemini.clone()));
    let dispatch_service = Arc::new(DispatchService::new(gateway));
    // Snapshot endpoints serve the built-in sample fleet; dispatch requests
    // carry their own snapshot in the body.
    let snapshot = Arc::new(sample_fleet(Local::now().date_naive()));

    let app = with_fleet_routes(dispatch_service, snapshot)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fleet dispatch service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

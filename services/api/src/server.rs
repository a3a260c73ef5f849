use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_attrition_routes;
use attrition_radar::config::AppConfig;
use attrition_radar::error::AppError;
use attrition_radar::telemetry;
use attrition_radar::workflows::attrition::RiskEngine;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
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

    let scoring = config.scoring.resolve()?;
    info!(source = ?config.scoring, "scoring configuration loaded");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(RiskEngine::new(scoring));
    let app = with_attrition_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "attrition radar ready");

    axum::serve(listener, app).await?;
    Ok(())
}

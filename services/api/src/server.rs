use crate::cli::ServeArgs;
use crate::infra::{default_eligibility_config, load_reference_data, AppState};
use crate::routes::with_search_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use flight_comp::config::AppConfig;
use flight_comp::error::AppError;
use flight_comp::search::{FlightSearchService, SimulatedFlightProvider};
use flight_comp::telemetry;
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

    let reference = load_reference_data(&config)?;
    let provider = Arc::new(SimulatedFlightProvider);
    let search_service = Arc::new(FlightSearchService::new(
        provider,
        default_eligibility_config(),
        reference,
    ));

    let app = with_search_routes(search_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "flight compensation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

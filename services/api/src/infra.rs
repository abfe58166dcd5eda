use chrono::NaiveDate;
use flight_comp::config::AppConfig;
use flight_comp::error::AppError;
use flight_comp::search::{EligibilityConfig, ReferenceData};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reference tables from the configured data directory, falling back to the
/// embedded sample data.
pub(crate) fn load_reference_data(config: &AppConfig) -> Result<ReferenceData, AppError> {
    match &config.reference.data_dir {
        Some(dir) => Ok(ReferenceData::from_dir(dir)?),
        None => Ok(ReferenceData::builtin()?),
    }
}

pub(crate) fn default_eligibility_config() -> EligibilityConfig {
    EligibilityConfig::default()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directives: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "invalid log filter '{directives}': unable to build EnvFilter")
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Filter directives derived from the configured level. Full directive
/// strings pass through untouched; a bare level stricter than `warn` still
/// keeps the search workflow's data-quality warnings (missing delay,
/// assumed route distance) visible.
fn filter_directives(config: &TelemetryConfig) -> String {
    let level = config.log_level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    match level.to_ascii_lowercase().as_str() {
        "off" | "error" => format!("{level},flight_comp=warn"),
        _ => level.to_string(),
    }
}

pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = filter_directives(config);
            EnvFilter::try_new(&directives)
                .map_err(|source| TelemetryError::Filter { directives, source })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn bare_level_passes_through() {
        assert_eq!(filter_directives(&config("info")), "info");
        assert_eq!(filter_directives(&config("debug")), "debug");
    }

    #[test]
    fn strict_levels_keep_data_quality_warnings_visible() {
        assert_eq!(filter_directives(&config("error")), "error,flight_comp=warn");
        assert_eq!(filter_directives(&config("off")), "off,flight_comp=warn");
    }

    #[test]
    fn full_directive_strings_are_untouched() {
        let directives = "error,flight_comp=debug,tower=off";
        assert_eq!(filter_directives(&config(directives)), directives);
    }

    #[test]
    fn directives_for_every_level_parse_as_filters() {
        for level in ["off", "error", "warn", "info", "debug", "trace"] {
            let directives = filter_directives(&config(level));
            EnvFilter::try_new(&directives).expect("directives parse");
        }
    }
}

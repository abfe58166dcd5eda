use crate::config::ConfigError;
use crate::search::provider::ProviderError;
use crate::search::reference::ReferenceDataError;
use crate::search::service::FlightSearchError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Reference(ReferenceDataError),
    Io(std::io::Error),
    Server(axum::Error),
    Search(FlightSearchError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Reference(err) => write!(f, "reference data error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Search(err) => write!(f, "flight search error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Reference(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Search(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Search(FlightSearchError::Provider(ProviderError::NotFound(_))) => (
                StatusCode::NOT_FOUND,
                "Unable to fetch flight information. Please check your flight number and try again."
                    .to_string(),
            ),
            AppError::Search(FlightSearchError::Provider(
                error @ ProviderError::InvalidFlightNumber(_),
            )) => (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()),
            AppError::Search(FlightSearchError::Provider(ProviderError::Unavailable(_))) => (
                StatusCode::BAD_GATEWAY,
                "Flight data source is temporarily unavailable. Please try again later."
                    .to_string(),
            ),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Reference(_)
            | AppError::Io(_)
            | AppError::Server(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<ReferenceDataError> for AppError {
    fn from(value: ReferenceDataError) -> Self {
        Self::Reference(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<FlightSearchError> for AppError {
    fn from(value: FlightSearchError) -> Self {
        Self::Search(value)
    }
}

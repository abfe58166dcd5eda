use std::sync::Arc;

use axum::{extract::State, routing::post, Router};

use crate::error::AppError;

use super::domain::{FlightQuery, FlightRecord};
use super::eligibility::CompensationVerdict;
use super::provider::FlightDataProvider;
use super::service::{FlightSearchService, FlightStatusReport};

/// Router builder exposing the flight search and raw evaluation endpoints.
pub fn search_router<P>(service: Arc<FlightSearchService<P>>) -> Router
where
    P: FlightDataProvider + 'static,
{
    Router::new()
        .route("/api/v1/flights/search", post(search_handler::<P>))
        .route(
            "/api/v1/compensation/evaluate",
            post(evaluate_handler::<P>),
        )
        .with_state(service)
}

pub(crate) async fn search_handler<P>(
    State(service): State<Arc<FlightSearchService<P>>>,
    axum::Json(query): axum::Json<FlightQuery>,
) -> Result<axum::Json<FlightStatusReport>, AppError>
where
    P: FlightDataProvider + 'static,
{
    let report = service.search(&query)?;
    Ok(axum::Json(report))
}

pub(crate) async fn evaluate_handler<P>(
    State(service): State<Arc<FlightSearchService<P>>>,
    axum::Json(flight): axum::Json<FlightRecord>,
) -> axum::Json<CompensationVerdict>
where
    P: FlightDataProvider + 'static,
{
    axum::Json(service.evaluate(&flight))
}

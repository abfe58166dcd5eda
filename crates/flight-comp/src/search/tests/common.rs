use std::sync::Arc;

use axum::response::Response;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::search::domain::{Airline, FlightLeg, FlightQuery, FlightRecord};
use crate::search::eligibility::{CompensationEngine, EligibilityConfig};
use crate::search::provider::{FlightDataProvider, ProviderError};
use crate::search::reference::ReferenceData;
use crate::search::router::search_router;
use crate::search::service::FlightSearchService;

pub(super) fn eligibility_config() -> EligibilityConfig {
    EligibilityConfig::default()
}

pub(super) fn reference() -> ReferenceData {
    ReferenceData::builtin().expect("embedded reference data parses")
}

/// Reference tables with a single curated route, for exercising exact tier
/// boundaries without depending on the shipped data.
pub(super) fn reference_with_route(departure: &str, arrival: &str, km: u32) -> ReferenceData {
    let eu = "code,name\nLHR,London Heathrow\nCDG,Paris Charles de Gaulle\n";
    let airports = "iata,name,latitude,longitude\n";
    let routes = format!("departure,arrival,distance_km\n{departure},{arrival},{km}\n");
    ReferenceData::from_readers(eu.as_bytes(), airports.as_bytes(), routes.as_bytes())
        .expect("test reference data parses")
}

pub(super) fn engine() -> CompensationEngine {
    CompensationEngine::new(eligibility_config(), reference())
}

pub(super) fn engine_with_reference(reference: ReferenceData) -> CompensationEngine {
    CompensationEngine::new(eligibility_config(), reference)
}

pub(super) fn flight(dep: &str, arr: &str, delay: Option<u32>) -> FlightRecord {
    let scheduled = Utc
        .with_ymd_and_hms(2026, 3, 14, 14, 30, 0)
        .single()
        .expect("valid timestamp");
    let actual = delay.map(|minutes| scheduled + Duration::minutes(i64::from(minutes)));

    FlightRecord {
        flight_number: "BA123".to_string(),
        airline: Airline {
            name: "British Airways".to_string(),
            iata: "BA".to_string(),
            icao: "BAW".to_string(),
        },
        departure: FlightLeg {
            airport: format!("{dep} Airport"),
            iata: dep.to_string(),
            icao: format!("Z{dep}"),
            terminal: Some("5".to_string()),
            gate: None,
            scheduled,
            actual,
            delay_minutes: delay,
        },
        arrival: FlightLeg {
            airport: format!("{arr} Airport"),
            iata: arr.to_string(),
            icao: format!("Z{arr}"),
            terminal: None,
            gate: None,
            scheduled: scheduled + Duration::hours(2),
            actual: actual.map(|at| at + Duration::hours(2)),
            delay_minutes: delay,
        },
        flight_status: "Delayed".to_string(),
    }
}

pub(super) fn query(flight_number: &str) -> FlightQuery {
    FlightQuery {
        flight_number: flight_number.to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date"),
    }
}

/// Provider test double returning the same record for every query.
pub(super) struct FixedFlightProvider {
    record: FlightRecord,
}

impl FixedFlightProvider {
    pub(super) fn new(record: FlightRecord) -> Self {
        Self { record }
    }
}

impl FlightDataProvider for FixedFlightProvider {
    fn fetch(&self, _query: &FlightQuery) -> Result<FlightRecord, ProviderError> {
        Ok(self.record.clone())
    }
}

/// Provider test double that always fails with the supplied constructor.
pub(super) struct FailingProvider {
    error: fn(String) -> ProviderError,
}

impl FailingProvider {
    pub(super) fn not_found() -> Self {
        Self {
            error: ProviderError::NotFound,
        }
    }

    pub(super) fn unavailable() -> Self {
        Self {
            error: ProviderError::Unavailable,
        }
    }

    pub(super) fn invalid_flight_number() -> Self {
        Self {
            error: ProviderError::InvalidFlightNumber,
        }
    }
}

impl FlightDataProvider for FailingProvider {
    fn fetch(&self, query: &FlightQuery) -> Result<FlightRecord, ProviderError> {
        Err((self.error)(query.flight_number.clone()))
    }
}

pub(super) fn service_with_record(
    record: FlightRecord,
) -> FlightSearchService<FixedFlightProvider> {
    FlightSearchService::new(
        Arc::new(FixedFlightProvider::new(record)),
        eligibility_config(),
        reference(),
    )
}

pub(super) fn router_with_record(record: FlightRecord) -> axum::Router {
    search_router(Arc::new(service_with_record(record)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Normalized flight record as resolved by a [`FlightDataProvider`].
///
/// Immutable once constructed; the engine trusts `delay_minutes` as
/// authoritative and never re-derives it from the timestamps.
///
/// [`FlightDataProvider`]: super::provider::FlightDataProvider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: Airline,
    pub departure: FlightLeg,
    pub arrival: FlightLeg,
    /// Display-only status label, not used in eligibility logic.
    pub flight_status: String,
}

impl FlightRecord {
    /// Delay used for eligibility computation, defaulting to 0 when unknown.
    ///
    /// Compensation keys off the departure leg, matching the upstream data
    /// sources this record is normalized from.
    pub fn effective_delay(&self) -> u32 {
        self.departure.delay_minutes.unwrap_or(0)
    }
}

/// Operating airline with its IATA/ICAO designators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    pub iata: String,
    pub icao: String,
}

/// One endpoint of a flight (departure or arrival).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub airport: String,
    pub iata: String,
    pub icao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    pub scheduled: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<DateTime<Utc>>,
    /// Minutes of delay; absent means "not yet known".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_minutes: Option<u32>,
}

/// User-supplied lookup request for a flight on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    pub flight_number: String,
    pub date: NaiveDate,
}

impl FlightQuery {
    /// Flight number with whitespace stripped and letters uppercased, the
    /// form providers key their lookups on.
    pub fn normalized_flight_number(&self) -> String {
        self.flight_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase()
    }
}

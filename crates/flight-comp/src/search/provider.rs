use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::domain::{Airline, FlightLeg, FlightQuery, FlightRecord};

/// Seam for resolving a flight query into a normalized record. May be a live
/// aviation API client or a deterministic generator; the eligibility engine
/// does not care which.
pub trait FlightDataProvider: Send + Sync {
    fn fetch(&self, query: &FlightQuery) -> Result<FlightRecord, ProviderError>;
}

/// Error enumeration for provider failures. All fallible behavior in the
/// workflow lives here; the engine itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no flight data available for {0}")]
    NotFound(String),
    #[error("'{0}' is not a valid flight number")]
    InvalidFlightNumber(String),
    #[error("flight data source unavailable: {0}")]
    Unavailable(String),
}

/// Deterministic stand-in for a live flight data API.
///
/// Generates plausible records keyed off a hash of the normalized flight
/// number and date, so repeated lookups for the same query agree. Route,
/// delay, terminal, and gate all derive from that seed.
#[derive(Debug, Default, Clone)]
pub struct SimulatedFlightProvider;

struct AirlineTemplate {
    iata: &'static str,
    icao: &'static str,
    name: &'static str,
    routes: &'static [(&'static str, &'static str)],
}

const AIRLINES: &[AirlineTemplate] = &[
    AirlineTemplate {
        iata: "BA",
        icao: "BAW",
        name: "British Airways",
        routes: &[("LHR", "CDG"), ("LHR", "FRA"), ("LGW", "BCN")],
    },
    AirlineTemplate {
        iata: "LH",
        icao: "DLH",
        name: "Lufthansa",
        routes: &[("FRA", "LHR"), ("MUC", "CDG"), ("FRA", "JFK")],
    },
    AirlineTemplate {
        iata: "AF",
        icao: "AFR",
        name: "Air France",
        routes: &[("CDG", "LHR"), ("CDG", "FRA"), ("ORY", "BCN")],
    },
    AirlineTemplate {
        iata: "AA",
        icao: "AAL",
        name: "American Airlines",
        routes: &[("JFK", "LHR"), ("LAX", "LHR"), ("JFK", "CDG")],
    },
];

const FALLBACK_AIRLINE: AirlineTemplate = AirlineTemplate {
    iata: "XX",
    icao: "SMP",
    name: "Sample Airline",
    routes: &[("LHR", "CDG")],
};

// (iata, icao, display name) for the airports the simulated routes touch.
const AIRPORTS: &[(&str, &str, &str)] = &[
    ("LHR", "EGLL", "London Heathrow"),
    ("LGW", "EGKK", "London Gatwick"),
    ("CDG", "LFPG", "Paris Charles de Gaulle"),
    ("ORY", "LFPO", "Paris Orly"),
    ("FRA", "EDDF", "Frankfurt"),
    ("MUC", "EDDM", "Munich"),
    ("BCN", "LEBL", "Barcelona"),
    ("JFK", "KJFK", "New York JFK"),
    ("LAX", "KLAX", "Los Angeles"),
];

// Delay minutes with percentage weights, biased toward on-time departures.
const DELAY_SCENARIOS: &[(u32, u64)] = &[
    (0, 30),
    (15, 20),
    (30, 15),
    (45, 10),
    (90, 10),
    (120, 5),
    (180, 5),
    (240, 3),
    (300, 2),
];

impl FlightDataProvider for SimulatedFlightProvider {
    fn fetch(&self, query: &FlightQuery) -> Result<FlightRecord, ProviderError> {
        let flight_number = query.normalized_flight_number();
        let (airline_code, _) = split_flight_number(&flight_number)
            .ok_or_else(|| ProviderError::InvalidFlightNumber(query.flight_number.clone()))?;

        let airline = AIRLINES
            .iter()
            .find(|candidate| candidate.iata == airline_code)
            .unwrap_or(&FALLBACK_AIRLINE);

        let seed = seed_for(&flight_number, query.date);
        let route = airline.routes[(seed % airline.routes.len() as u64) as usize];
        let delay = pick_delay(seed);

        let scheduled_departure = schedule(query.date, 14, 30);
        let scheduled_arrival = schedule(query.date, 16, 45);

        Ok(FlightRecord {
            flight_number: flight_number.clone(),
            airline: Airline {
                name: airline.name.to_string(),
                iata: airline_code.to_string(),
                icao: airline.icao.to_string(),
            },
            departure: leg(route.0, scheduled_departure, delay, seed),
            arrival: leg(route.1, scheduled_arrival, delay, seed.rotate_left(17)),
            flight_status: status_label(delay).to_string(),
        })
    }
}

/// Split a normalized flight number into its airline designator and numeric
/// part. Rejects anything that is not letters followed by digits.
fn split_flight_number(flight_number: &str) -> Option<(&str, &str)> {
    let digits_at = flight_number.find(|c: char| c.is_ascii_digit())?;
    let (prefix, digits) = flight_number.split_at(digits_at);
    if prefix.len() != 2
        || !prefix.chars().all(|c| c.is_ascii_alphabetic())
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    Some((prefix, digits))
}

// FNV-1a over the flight number and date keeps the generator reproducible
// without pulling in a randomness dependency.
fn seed_for(flight_number: &str, date: NaiveDate) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in flight_number.bytes().chain(date.to_string().bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn pick_delay(seed: u64) -> u32 {
    let mut bucket = (seed >> 8) % 100;
    for (delay, weight) in DELAY_SCENARIOS {
        if bucket < *weight {
            return *delay;
        }
        bucket -= weight;
    }
    0
}

fn schedule(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, minute, 0)
        .expect("literal time is valid")
        .and_utc()
}

fn leg(iata: &str, scheduled: DateTime<Utc>, delay: u32, seed: u64) -> FlightLeg {
    let (icao, airport) = AIRPORTS
        .iter()
        .find(|(code, _, _)| *code == iata)
        .map(|(_, icao, name)| (icao.to_string(), name.to_string()))
        .unwrap_or_else(|| (format!("Z{iata}"), format!("{iata} Airport")));

    let actual = scheduled + Duration::minutes(i64::from(delay));

    FlightLeg {
        airport,
        iata: iata.to_string(),
        icao,
        terminal: ((seed >> 24) % 2 == 0).then(|| ((seed >> 32) % 5 + 1).to_string()),
        gate: ((seed >> 4) % 10 < 7).then(|| ((seed >> 40) % 50 + 1).to_string()),
        scheduled,
        actual: Some(actual),
        delay_minutes: Some(delay),
    }
}

fn status_label(delay: u32) -> &'static str {
    match delay {
        0 => "On Time",
        1..=29 => "Slight Delay",
        30..=119 => "Delayed",
        120..=179 => "Significantly Delayed",
        _ => "Major Delay",
    }
}

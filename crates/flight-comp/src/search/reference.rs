use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::eligibility::{DistanceBasis, DistanceEstimate};

const EU_AIRPORTS_CSV: &str = include_str!("../../data/eu_airports.csv");
const AIRPORTS_CSV: &str = include_str!("../../data/airports.csv");
const ROUTE_DISTANCES_CSV: &str = include_str!("../../data/route_distances.csv");

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Reference tables the eligibility engine consults: the EU/EEA airport
/// allow-list, airport coordinates, and curated route distances.
///
/// The EU set is a non-exhaustive sample of major airports, maintained as
/// data so it can be completed without touching the rule logic.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    eu_airports: HashSet<String>,
    coordinates: HashMap<String, Coordinates>,
    route_overrides: HashMap<(String, String), u32>,
}

#[derive(Debug, Clone, Copy)]
struct Coordinates {
    latitude: f64,
    longitude: f64,
}

// The `name` columns in the CSVs are for maintainers; only the codes and
// coordinates are deserialized.
#[derive(Debug, Deserialize)]
struct EuAirportRow {
    code: String,
}

#[derive(Debug, Deserialize)]
struct AirportRow {
    iata: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct RouteRow {
    departure: String,
    arrival: String,
    distance_km: u32,
}

impl ReferenceData {
    /// Build from the reference tables embedded in the binary.
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Self::from_readers(
            EU_AIRPORTS_CSV.as_bytes(),
            AIRPORTS_CSV.as_bytes(),
            ROUTE_DISTANCES_CSV.as_bytes(),
        )
    }

    /// Build from `eu_airports.csv`, `airports.csv`, and
    /// `route_distances.csv` inside the given directory.
    pub fn from_dir(dir: &Path) -> Result<Self, ReferenceDataError> {
        let eu = std::fs::File::open(dir.join("eu_airports.csv"))?;
        let airports = std::fs::File::open(dir.join("airports.csv"))?;
        let routes = std::fs::File::open(dir.join("route_distances.csv"))?;
        Self::from_readers(eu, airports, routes)
    }

    pub fn from_readers(
        eu_airports: impl Read,
        airports: impl Read,
        route_distances: impl Read,
    ) -> Result<Self, ReferenceDataError> {
        let mut eu = HashSet::new();
        for row in csv::Reader::from_reader(eu_airports).deserialize() {
            let row: EuAirportRow = row?;
            eu.insert(row.code.trim().to_ascii_uppercase());
        }

        let mut coordinates = HashMap::new();
        for row in csv::Reader::from_reader(airports).deserialize() {
            let row: AirportRow = row?;
            if !(-90.0..=90.0).contains(&row.latitude)
                || !(-180.0..=180.0).contains(&row.longitude)
            {
                return Err(ReferenceDataError::InvalidCoordinates {
                    airport: row.iata,
                });
            }
            coordinates.insert(
                row.iata.trim().to_ascii_uppercase(),
                Coordinates {
                    latitude: row.latitude,
                    longitude: row.longitude,
                },
            );
        }

        let mut route_overrides = HashMap::new();
        for row in csv::Reader::from_reader(route_distances).deserialize() {
            let row: RouteRow = row?;
            route_overrides.insert(
                (
                    row.departure.trim().to_ascii_uppercase(),
                    row.arrival.trim().to_ascii_uppercase(),
                ),
                row.distance_km,
            );
        }

        Ok(Self {
            eu_airports: eu,
            coordinates,
            route_overrides,
        })
    }

    /// Membership test against the EU/EEA allow-list.
    pub fn is_eu_airport(&self, iata: &str) -> bool {
        self.eu_airports.contains(&iata.trim().to_ascii_uppercase())
    }

    /// Resolve the distance between two airports: curated route table first,
    /// then great-circle from coordinates. `None` when neither source knows
    /// the pair; the caller decides what to assume.
    pub fn route_distance(&self, departure: &str, arrival: &str) -> Option<DistanceEstimate> {
        let dep = departure.trim().to_ascii_uppercase();
        let arr = arrival.trim().to_ascii_uppercase();

        if let Some(km) = self.route_overrides.get(&(dep.clone(), arr.clone())) {
            return Some(DistanceEstimate {
                km: *km,
                basis: DistanceBasis::CuratedRoute,
            });
        }

        let from = self.coordinates.get(&dep)?;
        let to = self.coordinates.get(&arr)?;
        Some(DistanceEstimate {
            km: great_circle_km(*from, *to).round() as u32,
            basis: DistanceBasis::GreatCircle,
        })
    }
}

fn great_circle_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Error enumeration for reference table loading.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("failed to parse reference csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("airport {airport} has out-of-range coordinates")]
    InvalidCoordinates { airport: String },
    #[error("failed to read reference file: {0}")]
    Io(#[from] std::io::Error),
}

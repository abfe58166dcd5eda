//! Flight search workflow: provider seam, reference tables, eligibility
//! engine, and the service/router composing them.

pub mod domain;
pub mod eligibility;
pub mod provider;
pub mod reference;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Airline, FlightLeg, FlightQuery, FlightRecord};
pub use eligibility::{
    CompensationEngine, CompensationVerdict, DistanceBasis, DistanceEstimate, EligibilityConfig,
    Region, RouteAssessment,
};
pub use provider::{FlightDataProvider, ProviderError, SimulatedFlightProvider};
pub use reference::{ReferenceData, ReferenceDataError};
pub use router::search_router;
pub use service::{FlightSearchError, FlightSearchService, FlightStatusReport};

use std::sync::Arc;

use tracing::warn;

use super::domain::{FlightQuery, FlightRecord};
use super::eligibility::{
    CompensationEngine, CompensationVerdict, DistanceBasis, EligibilityConfig, Region,
};
use super::provider::{FlightDataProvider, ProviderError};
use super::reference::ReferenceData;
use serde::{Deserialize, Serialize};

/// Service composing a flight data provider with the eligibility engine.
///
/// The verdict is only computed after the flight record resolves; provider
/// failures surface here and never reach the engine.
pub struct FlightSearchService<P> {
    provider: Arc<P>,
    engine: Arc<CompensationEngine>,
}

impl<P> FlightSearchService<P>
where
    P: FlightDataProvider + 'static,
{
    pub fn new(provider: Arc<P>, config: EligibilityConfig, reference: ReferenceData) -> Self {
        Self::with_engine(provider, Arc::new(CompensationEngine::new(config, reference)))
    }

    pub fn with_engine(provider: Arc<P>, engine: Arc<CompensationEngine>) -> Self {
        Self { provider, engine }
    }

    /// Resolve a query and evaluate the resulting record.
    pub fn search(&self, query: &FlightQuery) -> Result<FlightStatusReport, FlightSearchError> {
        let flight = self.provider.fetch(query)?;

        if flight.departure.delay_minutes.is_none() {
            warn!(
                flight = %flight.flight_number,
                "delay not yet known, treating as 0 minutes"
            );
        }

        let assessment = self.engine.assess_route(&flight);
        if assessment.region == Region::Eu && assessment.distance.basis == DistanceBasis::Assumed {
            warn!(
                departure = %flight.departure.iata,
                arrival = %flight.arrival.iata,
                assumed_km = assessment.distance.km,
                "route missing from reference tables, using assumed distance"
            );
        }

        let compensation = self.engine.evaluate(&flight);

        Ok(FlightStatusReport {
            flight,
            compensation,
        })
    }

    /// Evaluate an already-resolved record without consulting the provider.
    pub fn evaluate(&self, flight: &FlightRecord) -> CompensationVerdict {
        self.engine.evaluate(flight)
    }
}

/// Resolved flight plus its compensation verdict, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStatusReport {
    pub flight: FlightRecord,
    pub compensation: CompensationVerdict,
}

/// Error raised by the search service.
#[derive(Debug, thiserror::Error)]
pub enum FlightSearchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

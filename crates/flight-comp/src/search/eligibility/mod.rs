mod config;
mod policy;
mod rules;

pub use config::EligibilityConfig;

use super::domain::FlightRecord;
use super::reference::ReferenceData;
use serde::{Deserialize, Serialize};

/// Stateless engine applying the EC 261/2004 delay rules to a flight record.
///
/// Total over its input domain: every record yields a verdict, with
/// ambiguous or missing data classified conservatively toward "ineligible".
pub struct CompensationEngine {
    config: EligibilityConfig,
    reference: ReferenceData,
}

impl CompensationEngine {
    pub fn new(config: EligibilityConfig, reference: ReferenceData) -> Self {
        Self { config, reference }
    }

    /// Evaluate a flight record into a compensation verdict. Deterministic
    /// and side-effect free; identical input yields an identical verdict.
    pub fn evaluate(&self, flight: &FlightRecord) -> CompensationVerdict {
        let assessment = rules::assess_route(flight, &self.reference, &self.config);
        policy::build_verdict(&assessment, &self.config)
    }

    /// Route diagnostics behind a verdict, so callers can log data-quality
    /// degradations such as an assumed route distance.
    pub fn assess_route(&self, flight: &FlightRecord) -> RouteAssessment {
        rules::assess_route(flight, &self.reference, &self.config)
    }
}

/// Which compensation regime's rules apply to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "Non-EU")]
    NonEu,
}

/// Verdict returned to the presentation layer; newly constructed per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationVerdict {
    pub region: Region,
    pub eligible: bool,
    /// Whole euros; 0 when not eligible.
    pub amount_eur: u32,
    pub message: String,
    /// Ordered entitlement descriptions; order matters for rendering only.
    pub rights: Vec<String>,
    /// Echo of the delay the verdict was computed from, for auditability.
    pub delay_minutes: u32,
}

/// Route classification and the distance the tier rules would apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAssessment {
    pub region: Region,
    pub distance: DistanceEstimate,
    pub effective_delay: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceEstimate {
    pub km: u32,
    pub basis: DistanceBasis,
}

/// Provenance of a distance figure, so assumed values can be flagged
/// instead of silently landing routes in the cheapest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceBasis {
    CuratedRoute,
    GreatCircle,
    Assumed,
}

use serde::{Deserialize, Serialize};

/// Thresholds and tier amounts behind the EC 261/2004 delay rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Minimum delay in minutes before compensation applies.
    pub delay_threshold_minutes: u32,
    /// Upper bound of the short-haul tier in kilometers.
    pub short_haul_km: u32,
    /// Upper bound of the medium-haul tier in kilometers.
    pub medium_haul_km: u32,
    pub short_haul_amount_eur: u32,
    pub medium_haul_amount_eur: u32,
    pub long_haul_amount_eur: u32,
    /// Distance substituted when neither the curated table nor airport
    /// coordinates cover a route. Surfaced as `DistanceBasis::Assumed` so
    /// callers can flag the degradation instead of trusting the tier.
    pub assumed_route_km: u32,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            delay_threshold_minutes: 180,
            short_haul_km: 1500,
            medium_haul_km: 3500,
            short_haul_amount_eur: 250,
            medium_haul_amount_eur: 400,
            long_haul_amount_eur: 600,
            assumed_route_km: 1000,
        }
    }
}

use super::super::domain::FlightRecord;
use super::super::reference::ReferenceData;
use super::config::EligibilityConfig;
use super::{DistanceBasis, DistanceEstimate, Region, RouteAssessment};

pub(crate) fn assess_route(
    flight: &FlightRecord,
    reference: &ReferenceData,
    config: &EligibilityConfig,
) -> RouteAssessment {
    let departure = flight.departure.iata.as_str();
    let arrival = flight.arrival.iata.as_str();

    let region = if reference.is_eu_airport(departure) || reference.is_eu_airport(arrival) {
        Region::Eu
    } else {
        Region::NonEu
    };

    let distance = reference
        .route_distance(departure, arrival)
        .unwrap_or(DistanceEstimate {
            km: config.assumed_route_km,
            basis: DistanceBasis::Assumed,
        });

    RouteAssessment {
        region,
        distance,
        effective_delay: flight.effective_delay(),
    }
}

pub(crate) fn compensation_amount(distance_km: u32, config: &EligibilityConfig) -> u32 {
    if distance_km <= config.short_haul_km {
        config.short_haul_amount_eur
    } else if distance_km <= config.medium_haul_km {
        config.medium_haul_amount_eur
    } else {
        config.long_haul_amount_eur
    }
}

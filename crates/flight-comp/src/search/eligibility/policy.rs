use super::config::EligibilityConfig;
use super::rules::compensation_amount;
use super::{CompensationVerdict, Region, RouteAssessment};

pub(crate) fn build_verdict(
    assessment: &RouteAssessment,
    config: &EligibilityConfig,
) -> CompensationVerdict {
    match assessment.region {
        Region::NonEu => non_eu_verdict(assessment),
        Region::Eu if assessment.effective_delay >= config.delay_threshold_minutes => {
            eligible_verdict(assessment, config)
        }
        Region::Eu => under_threshold_verdict(assessment),
    }
}

fn non_eu_verdict(assessment: &RouteAssessment) -> CompensationVerdict {
    CompensationVerdict {
        region: Region::NonEu,
        eligible: false,
        amount_eur: 0,
        message: "This flight is not covered by EU compensation rules, but you may have other rights."
            .to_string(),
        rights: vec![
            "Refund if flight cancelled".to_string(),
            "Rebooking on next available flight".to_string(),
            "Meals and refreshments for delays over 2 hours".to_string(),
            "Hotel accommodation for overnight delays".to_string(),
            "Transportation to/from hotel".to_string(),
        ],
        delay_minutes: assessment.effective_delay,
    }
}

fn eligible_verdict(assessment: &RouteAssessment, config: &EligibilityConfig) -> CompensationVerdict {
    let amount = compensation_amount(assessment.distance.km, config);

    CompensationVerdict {
        region: Region::Eu,
        eligible: true,
        amount_eur: amount,
        message: "Great news! You're likely entitled to compensation under EU Regulation 261/2004."
            .to_string(),
        rights: vec![
            format!("€{amount} compensation per passenger"),
            "Meals and refreshments".to_string(),
            "Hotel accommodation if needed".to_string(),
            "Right to refund or rebooking".to_string(),
        ],
        delay_minutes: assessment.effective_delay,
    }
}

fn under_threshold_verdict(assessment: &RouteAssessment) -> CompensationVerdict {
    CompensationVerdict {
        region: Region::Eu,
        eligible: false,
        amount_eur: 0,
        message: "Unfortunately, delays under 3 hours don't qualify for EU compensation."
            .to_string(),
        rights: vec![
            "Meals and refreshments for delays over 2 hours".to_string(),
            "Hotel accommodation for overnight delays".to_string(),
            "Transportation to/from hotel".to_string(),
            "Right to rebooking".to_string(),
        ],
        delay_minutes: assessment.effective_delay,
    }
}

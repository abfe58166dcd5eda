use crate::infra::{default_eligibility_config, load_reference_data, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use flight_comp::config::AppConfig;
use flight_comp::error::AppError;
use flight_comp::search::{
    FlightQuery, FlightSearchService, FlightStatusReport, SimulatedFlightProvider,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Flight number, e.g. BA123
    pub(crate) flight_number: String,
    /// Flight date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Print the raw JSON report instead of the formatted summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        flight_number,
        date,
        json,
    } = args;

    let config = AppConfig::load()?;
    let reference = load_reference_data(&config)?;
    let service = FlightSearchService::new(
        Arc::new(SimulatedFlightProvider),
        default_eligibility_config(),
        reference,
    );

    let query = FlightQuery {
        flight_number,
        date: date.unwrap_or_else(|| Local::now().date_naive()),
    };
    let report = service.search(&query)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?
        );
    } else {
        render_report(&report);
    }

    Ok(())
}

fn render_report(report: &FlightStatusReport) {
    let flight = &report.flight;
    let verdict = &report.compensation;

    println!(
        "{} {} from {} ({}) to {} ({})",
        flight.airline.name,
        flight.flight_number,
        flight.departure.airport,
        flight.departure.iata,
        flight.arrival.airport,
        flight.arrival.iata
    );
    println!(
        "Status: {} ({} min delay)",
        flight.flight_status, verdict.delay_minutes
    );

    println!("\n{}", verdict.message);
    if verdict.eligible {
        println!("Estimated compensation: €{}", verdict.amount_eur);
    }
    println!("\nYour rights:");
    for right in &verdict.rights {
        println!("  - {right}");
    }
}

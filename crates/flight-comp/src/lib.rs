//! Flight status lookup and EU261 delay compensation eligibility.
//!
//! The `search` module owns the domain model, the flight data provider seam,
//! the reference tables, and the compensation eligibility engine. The
//! remaining modules carry the service plumbing (configuration, telemetry,
//! application errors) shared with the HTTP binary.

pub mod config;
pub mod error;
pub mod search;
pub mod telemetry;

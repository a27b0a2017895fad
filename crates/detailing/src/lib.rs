//! Self-assessment recommendations and booking intake for a car-detailing shop.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

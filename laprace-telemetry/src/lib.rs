//! # laprace Telemetry
//!
//! Crate for logging and metrics.

pub mod logging;
pub mod metrics;

pub use logging::RaceLogger;
pub use metrics::RaceMetrics;

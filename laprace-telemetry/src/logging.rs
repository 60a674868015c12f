//! ## laprace-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! Events go to stderr so that the scoreboard on stdout stays clean.
//! `RUST_LOG` wins over the configured default level.

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct RaceLogger;

impl RaceLogger {
    /// Installs the global subscriber. Calling it twice is harmless; the
    /// second subscriber is discarded.
    pub fn init(default_level: &str) {
        let _ = fmt()
            .with_env_filter(Self::filter(default_level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    fn filter(default_level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }

    pub fn log_winners(laps: u32, winners: &[&str]) {
        info!(laps, winners = ?winners, "race finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_logging() {
        RaceLogger::log_winners(5, &["pobi", "crong"]);
        assert!(logs_contain("race finished"));
        assert!(logs_contain("pobi"));
    }
}

//! ## laprace-telemetry::metrics
//! **Prometheus counters and histograms for races**

use std::time::Duration;

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

#[derive(Debug, Clone)]
pub struct RaceMetrics {
    pub registry: Registry,
    pub races: IntCounter,
    pub rounds: IntCounter,
    pub advances: IntCounter,
    pub race_duration: Histogram,
}

impl RaceMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let races = IntCounter::new("laprace_races_total", "Total completed races")?;
        let rounds = IntCounter::new("laprace_rounds_total", "Total laps run")?;
        let advances = IntCounter::new(
            "laprace_advances_total",
            "Total successful advancement attempts",
        )?;
        let race_duration = Histogram::with_opts(
            HistogramOpts::new("laprace_race_duration_seconds", "Wall time of a full race")
                .buckets(vec![0.000_1, 0.001, 0.01, 0.1, 1.0]),
        )?;

        registry.register(Box::new(races.clone()))?;
        registry.register(Box::new(rounds.clone()))?;
        registry.register(Box::new(advances.clone()))?;
        registry.register(Box::new(race_duration.clone()))?;

        Ok(Self {
            registry,
            races,
            rounds,
            advances,
            race_duration,
        })
    }

    /// Records one finished race.
    pub fn observe_race(&self, rounds: u64, advances: u64, elapsed: Duration) {
        self.races.inc();
        self.rounds.inc_by(rounds);
        self.advances.inc_by(advances);
        self.race_duration.observe(elapsed.as_secs_f64());
    }

    /// Renders the registry in the Prometheus text format.
    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use laprace_config::{LapraceConfig, RuleKind, RulesConfig};
use laprace_core::rules::{AlwaysAdvance, Rule, ThresholdRule};
use laprace_core::{Competitor, Race, Scenario};
use laprace_telemetry::{RaceLogger, RaceMetrics};

use crate::input::Prompt;
use crate::registry::{EntityKind, RacerRegistry};
use crate::scoreboard::Scoreboard;

#[derive(Parser)]
#[command(name = "laprace", version, about)]
pub struct Cli {
    /// Configuration file; defaults to `config/laprace.yaml` plus overrides
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a race, asking for anything not given as a flag
    Run(RunArgs),
    /// Replay a race described by a YAML scenario file
    Scenario(ScenarioArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Number of laps
    #[arg(short, long)]
    pub laps: Option<u32>,
    /// Racer names, split on the configured separator
    #[arg(short, long)]
    pub names: Option<String>,
    /// Kind of racer shown in prompts
    #[arg(short, long, value_enum)]
    pub kind: Option<EntityKind>,
    /// Seed for the random rule
    #[arg(long)]
    pub seed: Option<u64>,
    /// Advancement rule
    #[arg(long, value_enum)]
    pub rule: Option<RuleArg>,
    /// Print Prometheus metrics to stderr after the race
    #[arg(long)]
    pub metrics: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Scenario file to replay
    pub file: PathBuf,
    /// Print Prometheus metrics to stderr after the race
    #[arg(long)]
    pub metrics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    Always,
    Random,
}

impl From<RuleArg> for RuleKind {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Always => RuleKind::Always,
            RuleArg::Random => RuleKind::Random,
        }
    }
}

pub fn dispatch(cli: Cli, config: &LapraceConfig) -> anyhow::Result<()> {
    let metrics = RaceMetrics::new()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let print_metrics = match cli.command {
        Commands::Run(args) => {
            run_race(&args, config, stdin.lock(), stdout.lock(), &metrics)?;
            args.metrics
        }
        Commands::Scenario(args) => {
            run_scenario(&args, stdout.lock(), &metrics)?;
            args.metrics
        }
    };

    if print_metrics || config.telemetry.metrics {
        eprint!("{}", metrics.gather_metrics()?);
    }
    Ok(())
}

/// Collects whatever the flags leave out, runs the race and prints the
/// scoreboard.
pub fn run_race<R: BufRead, W: Write>(
    args: &RunArgs,
    config: &LapraceConfig,
    input: R,
    mut output: W,
    metrics: &RaceMetrics,
) -> anyhow::Result<Race> {
    let mut prompt = Prompt::new(input, &mut output, config.race.max_attempts);
    let mut registry = RacerRegistry::new(config.race.separator.as_str());

    let mut race = match args.laps {
        Some(laps) => Race::new(laps)?,
        None => registry.ask_laps(&mut prompt, config.race.laps)?,
    };

    let competitors = match &args.names {
        Some(names) => registry.parse_names(names)?,
        None => {
            match args.kind {
                Some(kind) => registry.set_kind(kind),
                None => {
                    registry.select_entity_type(&mut prompt)?;
                }
            }
            registry.register(&mut prompt)?
        }
    };

    let mut rules = config.rules.clone();
    if let Some(rule) = args.rule {
        rules.kind = rule.into();
    }
    if args.seed.is_some() {
        rules.seed = args.seed;
    }

    info!(laps = race.laps(), racers = competitors.len(), kind = %registry.kind(), "starting race");
    let started = Instant::now();
    race.start(competitors, Some(build_rules(&rules)))?;
    observe(metrics, &race, started);

    Scoreboard::new(&race).render(prompt.output())?;
    Ok(race)
}

/// Replays a scenario document. Records captured before a failing rule
/// are still printed.
pub fn run_scenario<W: Write>(
    args: &ScenarioArgs,
    mut output: W,
    metrics: &RaceMetrics,
) -> anyhow::Result<Race> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("reading scenario {}", args.file.display()))?;
    let scenario = Scenario::from_yaml(&source)?;

    let mut race = scenario.prepare()?;
    let started = Instant::now();
    let outcome = scenario.start(&mut race);
    Scoreboard::new(&race).render(&mut output)?;
    outcome.with_context(|| format!("scenario {}", args.file.display()))?;

    observe(metrics, &race, started);
    Ok(race)
}

pub fn build_rules(config: &RulesConfig) -> Vec<Box<dyn Rule>> {
    let rule: Box<dyn Rule> = match config.kind {
        RuleKind::Always => Box::new(AlwaysAdvance),
        RuleKind::Random => Box::new(match config.seed {
            Some(seed) => ThresholdRule::seeded(config.threshold, config.max_roll, seed),
            None => ThresholdRule::new(config.threshold, config.max_roll),
        }),
    };
    vec![rule]
}

fn observe(metrics: &RaceMetrics, race: &Race, started: Instant) {
    let advances: u64 = race
        .competitors()
        .iter()
        .map(|c| u64::from(c.position()))
        .sum();
    metrics.observe_race(race.records().len() as u64, advances, started.elapsed());

    let winners: Vec<_> = race.winners().iter().map(Competitor::name).collect();
    RaceLogger::log_winners(race.laps(), &winners);
}

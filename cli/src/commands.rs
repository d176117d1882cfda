pub mod run;
pub mod targets;

use std::time::Duration;

use breach_common::config::{Config, DEFAULT_RETRIES, DEFAULT_SEED};
use breach_common::target::Target;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "breach")]
#[command(about = "Enumerates corporate networks through one generic client.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for the simulated uplink
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Milliseconds spent on each acquisition attempt
    #[arg(long, global = true, default_value_t = 150)]
    pub latency_ms: u64,

    /// Probability that an acquisition attempt is refused
    #[arg(long, global = true, default_value_t = 0.0, value_parser = parse_rate)]
    pub failure_rate: f64,

    /// Extra attempts after a refused acquisition
    #[arg(long, global = true, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Print less (-q summaries only, -qq warnings only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand, Clone, Copy)]
pub enum Commands {
    /// Run every scenario: each target through its dedicated and its generic client
    #[command(alias = "r")]
    Run,
    /// List the targets and the schema each one is bound to
    #[command(alias = "t")]
    Targets {
        /// Only show this target (case-insensitive)
        target: Option<Target>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            seed: self.seed,
            latency: Duration::from_millis(self.latency_ms),
            failure_rate: self.failure_rate,
            retries: self.retries,
            quiet: self.quiet,
        }
    }
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|_| format!("invalid rate: {s}"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("rate must be between 0 and 1, got {rate}"))
    }
}

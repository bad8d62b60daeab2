use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::store::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "outbreak", about = "Cooperative disease-control game server")]
#[command(version)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Drop games untouched for this many hours
    #[arg(long, default_value_t = 24)]
    pub idle_timeout_hours: u64,

    /// Minutes between idle sweeps
    #[arg(long, default_value_t = 360)]
    pub sweep_interval_minutes: u64,

    /// Log level written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            idle_timeout: Duration::from_secs(self.idle_timeout_hours * 60 * 60),
            sweep_interval: Duration::from_secs(self.sweep_interval_minutes.max(1) * 60),
            seed: self.seed,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_store() {
        let args = Args::try_parse_from(["outbreak"]).unwrap();
        assert_eq!(args.store_config(), StoreConfig::default());
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "outbreak",
            "--seed",
            "42",
            "--idle-timeout-hours",
            "1",
            "--sweep-interval-minutes",
            "5",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = args.store_config();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.idle_timeout, Duration::from_secs(3600));
        assert_eq!(config.sweep_interval, Duration::from_secs(300));
        assert_eq!(args.log_level, LogLevel::Debug);
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Hazard Dash in the terminal.

mod driver;
mod input;
mod terminal;
mod timers;

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::{mpsc, Mutex},
    time::Duration,
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use hazard_dash_system_pacing::{Config, Pacing};
use hazard_dash_world::World;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::{driver::Driver, terminal::TerminalBackend, timers::ThreadScheduler};

/// Dodge the hazards and reach the target on every level.
#[derive(Debug, Parser)]
#[command(name = "hazard-dash", version, about)]
struct Args {
    /// Milliseconds between two game ticks.
    #[arg(long, default_value_t = 10)]
    tick_ms: u64,
    /// Milliseconds to show the level-complete banner before the next level.
    #[arg(long, default_value_t = 1000)]
    transition_ms: u64,
    /// File receiving diagnostic logs; logging is disabled without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Invalid combinations of command-line options.
#[derive(Debug, Error, PartialEq, Eq)]
enum ConfigError {
    /// A zero tick interval would spin the timer thread.
    #[error("tick interval must be at least one millisecond")]
    ZeroTickInterval,
}

impl Args {
    fn pacing_config(&self) -> Result<Config, ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(Config::new(
            Duration::from_millis(self.tick_ms),
            Duration::from_millis(self.transition_ms),
        ))
    }
}

fn init_tracing(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow!("installing log subscriber: {error}"))
}

/// Entry point for the Hazard Dash command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.pacing_config()?;
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let (signals, queue) = mpsc::channel();
    let scheduler = ThreadScheduler::spawn(signals.clone());
    let mut backend = TerminalBackend::enter()?;
    input::spawn_key_reader(signals);

    Driver::new(World::new(), Pacing::new(config), scheduler).run(queue, &mut backend)
}

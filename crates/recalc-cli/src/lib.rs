#![forbid(unsafe_code)]

//! recalc command-line interface.
//!
//! The environment is the primary configuration source (see
//! [`recalc::Config`]); the flags here are per-session overrides. The REPL
//! itself lives in [`repl`] and is generic over its input/output streams so
//! sessions can be driven from tests.

pub mod repl;
mod shutdown;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use recalc::{CalcError, Calculator, Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "recalc",
    about = "Terminal calculator with undo/redo history",
    version
)]
pub struct Cli {
    /// Path of the history file (overrides HISTORY_FILE).
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Maximum number of retained calculations (overrides MAX_HISTORY).
    #[arg(long, value_name = "N")]
    pub max_history: Option<usize>,

    /// Disable auto-save for this session (overrides AUTO_SAVE).
    #[arg(long)]
    pub no_auto_save: bool,
}

/// Top-level CLI failure.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Calc(CalcError::Config(_)) => 2,
            _ => 1,
        }
    }
}

pub fn run_from_env() -> Result<(), CliError> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let config = effective_config(cli, Config::from_env().map_err(CalcError::from)?)
        .map_err(CalcError::from)?;
    init_tracing(config.log_level);
    shutdown::install();

    let mut calculator = Calculator::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut calculator, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Apply CLI overrides on top of the environment configuration.
fn effective_config(cli: Cli, mut config: Config) -> Result<Config, ConfigError> {
    if let Some(path) = cli.history_file {
        config.history_file = path;
    }
    if let Some(max) = cli.max_history {
        if max == 0 {
            return Err(ConfigError::InvalidValue {
                var: "--max-history",
                value: "0".to_string(),
            });
        }
        config.max_history = max;
    }
    if cli.no_auto_save {
        config.auto_save = false;
    }
    Ok(config)
}

/// Diagnostics go to stderr so REPL output on stdout stays clean.
fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

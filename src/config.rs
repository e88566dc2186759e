//! Configuration and CLI argument handling

use crate::domain::Preset;
use crate::persistence::{config_file, load_settings, AppSettings};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "tempo")]
#[command(about = "A terminal focus timer with a simple personal to-do list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.json. Defaults to <app dir>/config.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preset loaded when the screen opens
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a local .tempo directory in the current directory
    Init,
    /// Clear the stored session token
    Logout,
    /// Print the effective configuration as JSON
    Config,
}

/// Effective runtime configuration: config.json merged with CLI flags
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: AppSettings,
    pub start_preset: Preset,
    pub verbose: bool,
}

impl Config {
    /// Load config.json (from --config or the app directory) and apply CLI overrides
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => config_file()?,
        };
        let settings = load_settings(path)?;
        Ok(Self::from_settings(settings, cli))
    }

    fn from_settings(settings: AppSettings, cli: &Cli) -> Self {
        Self {
            settings,
            start_preset: cli.preset.unwrap_or(Preset::Pomodoro),
            verbose: cli.verbose,
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

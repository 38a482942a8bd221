//! autoapi CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use autoapi::config::GeneratorConfig;
use autoapi::observability::{self, ObservabilityConfig};
use autoapi_cli_lib::MakeApiCommand;
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "autoapi")]
#[command(version)]
#[command(about = "Interactive REST API generator for Laravel applications", long_about = None)]
struct Cli {
    /// Application root the files are written under
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to `autoapi.toml` in the root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model, migration, controller, routes and OpenAPI stub
    #[command(name = "make:auto-api")]
    MakeAutoApi,
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load_from(path),
        None => GeneratorConfig::load_for_root(&cli.root),
    };
    config.context("Failed to load configuration")
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    tracing::debug!(root = %cli.root.display(), "configuration loaded");

    match cli.command {
        Commands::MakeAutoApi => {
            MakeApiCommand::new(cli.root.clone(), config).execute()?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init(&ObservabilityConfig::from_verbosity(cli.verbose));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("✗").red().bold());
            ExitCode::FAILURE
        }
    }
}

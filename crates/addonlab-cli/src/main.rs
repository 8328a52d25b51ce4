//! # addonlab CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; tracing verbosity is
//! driven by repeated `-v` flags.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use addonlab_cli::check::{run_check, CheckArgs};
use addonlab_cli::rebuild::{run_rebuild, RebuildArgs};

/// Exercise tooling for the native-addon workshop.
///
/// Verifies learner `binding.gyp` descriptors with per-checkpoint feedback
/// and drives node-gyp rebuilds of submitted addon projects.
#[derive(Parser, Debug)]
#[command(name = "addonlab", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify a submission's binding.gyp descriptor.
    Check(CheckArgs),

    /// Run the node-gyp clean/configure/build pipeline on a project.
    Rebuild(RebuildArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Rebuild(args) => run_rebuild(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

//! # Rebuild Subcommand
//!
//! Runs the node-gyp clean/configure/build pipeline against an addon
//! project directory and reports the first failing phase.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use addonlab_gyp::rebuild_in;

/// Arguments for the `addonlab rebuild` subcommand.
#[derive(Args, Debug)]
pub struct RebuildArgs {
    /// Addon project directory (must contain a binding.gyp).
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

/// Execute the rebuild subcommand.
///
/// Returns exit code: 0 when every phase succeeds, 1 when a phase fails,
/// 2 on operational error.
pub fn run_rebuild(args: &RebuildArgs) -> Result<u8> {
    tracing::info!(dir = %args.dir.display(), "rebuilding addon project");

    match rebuild_in(&args.dir) {
        Ok(()) => {
            println!("OK: rebuilt {}", args.dir.display());
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            Ok(1)
        }
    }
}

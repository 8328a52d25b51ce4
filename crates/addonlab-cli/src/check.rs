//! # Check Subcommand
//!
//! Verifies a submission's `binding.gyp` descriptor and prints the feedback
//! a learner sees: one `PASS:` line per cleared checkpoint, then a final
//! `OK:` line, or the first `FAIL:` line when a checkpoint rejects the
//! descriptor.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use addonlab_binding::{verify_binding, CheckOptions, BINDING_FILE};

/// Arguments for the `addonlab check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Submission directory containing the binding.gyp to verify.
    #[arg(value_name = "SUBMISSION")]
    pub submission: PathBuf,

    /// Skip the include_dirs / NAN checkpoints.
    #[arg(long)]
    pub skip_include_dirs: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every checkpoint passes, 1 when verification
/// fails, 2 on operational error.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let options = CheckOptions {
        skip_include_dirs: args.skip_include_dirs,
    };
    let report = verify_binding(&args.submission, &options);

    for message in report.passes() {
        println!("PASS: {message}");
    }

    match report.failure() {
        None => {
            println!("OK: {BINDING_FILE}");
            Ok(0)
        }
        Some(failure) => {
            println!("FAIL: {failure}");
            Ok(1)
        }
    }
}

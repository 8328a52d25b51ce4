//! The clean/configure/build pipeline.

use std::path::Path;

use crate::client::{GypClient, NodeGyp};
use crate::error::PhaseError;
use crate::phase::Phase;

/// Runs the full rebuild sequence against `client`.
///
/// Phases run strictly in [`Phase::SEQUENCE`] order and each starts only
/// after the previous one succeeded. The first failure is attributed to
/// its phase and aborts the remainder; no phase is retried.
pub fn rebuild(client: &dyn GypClient) -> Result<(), PhaseError> {
    for phase in Phase::SEQUENCE {
        run_phase(client, phase)?;
    }
    Ok(())
}

/// Rebuilds the addon project at `project_dir` with the process-backed
/// client.
///
/// The directory is handed to every child process via
/// `Command::current_dir`; the working directory of the calling process
/// is identical before and after this call on every exit path.
pub fn rebuild_in(project_dir: &Path) -> Result<(), PhaseError> {
    let client = NodeGyp::new(project_dir);
    rebuild(&client)
}

fn run_phase(client: &dyn GypClient, phase: Phase) -> Result<(), PhaseError> {
    tracing::info!(phase = %phase, "running node-gyp phase");
    let outcome = match phase {
        Phase::Clean => client.clean(),
        Phase::Configure => client.configure(),
        Phase::Build => client.build(),
    };
    outcome.map_err(|source| PhaseError {
        phase,
        message: source.to_string(),
    })
}

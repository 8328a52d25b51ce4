//! The build-tool collaborator: a trait seam plus the process-backed
//! `node-gyp` client.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::GypError;
use crate::phase::Phase;

/// Arguments appended to every invocation so the tool's own progress
/// chatter does not interleave with exercise feedback.
const LOG_LEVEL_ARGS: [&str; 2] = ["--loglevel", "silent"];

/// The injected build tool the rebuild pipeline drives.
///
/// One method per command; implementations report success or a failure
/// message and nothing else. Phase ordering and attribution live in the
/// pipeline, not here.
pub trait GypClient {
    fn clean(&self) -> Result<(), GypError>;
    fn configure(&self) -> Result<(), GypError>;
    fn build(&self) -> Result<(), GypError>;
}

/// Process-backed client that shells out to the `node-gyp` executable.
///
/// Each invocation runs `node-gyp <command> --loglevel silent` with
/// [`Command::current_dir`] pointed at the project directory, so the
/// calling process's working directory is never touched.
#[derive(Debug, Clone)]
pub struct NodeGyp {
    project_dir: PathBuf,
}

impl NodeGyp {
    /// Creates a client for the addon project at `project_dir`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    /// The directory every invocation runs in.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn invoke(&self, phase: Phase) -> Result<(), GypError> {
        tracing::debug!(
            phase = %phase,
            project_dir = %self.project_dir.display(),
            "invoking node-gyp"
        );

        let output = Command::new("node-gyp")
            .arg(phase.subcommand())
            .args(LOG_LEVEL_ARGS)
            .current_dir(&self.project_dir)
            .output()
            .map_err(|source| GypError::Spawn { source })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let message = if stderr.is_empty() {
            output.status.to_string()
        } else {
            stderr.to_string()
        };
        Err(GypError::Failed { message })
    }
}

impl GypClient for NodeGyp {
    fn clean(&self) -> Result<(), GypError> {
        self.invoke(Phase::Clean)
    }

    fn configure(&self) -> Result<(), GypError> {
        self.invoke(Phase::Configure)
    }

    fn build(&self) -> Result<(), GypError> {
        self.invoke(Phase::Build)
    }
}

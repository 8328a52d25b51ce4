//! Failure types for `node-gyp` invocations and the rebuild pipeline.

use std::io;

use thiserror::Error;

use crate::phase::Phase;

/// Failure of a single `node-gyp` invocation, before phase attribution.
#[derive(Debug, Error)]
pub enum GypError {
    /// The `node-gyp` executable could not be started at all, typically
    /// because it is not installed or not on PATH.
    #[error("failed to start node-gyp: {source}")]
    Spawn {
        /// Underlying spawn failure.
        source: io::Error,
    },

    /// `node-gyp` ran and exited unsuccessfully. The message carries the
    /// tool's trimmed stderr, or the exit status when stderr was empty.
    #[error("{message}")]
    Failed { message: String },
}

/// A rebuild failure attributed to the phase that produced it.
///
/// This is the error the pipeline surfaces to callers; the rendered form
/// is the learner-facing feedback line.
#[derive(Debug, Error)]
#[error("node-gyp {phase}: {message}")]
pub struct PhaseError {
    /// The phase whose invocation failed.
    pub phase: Phase,
    /// The underlying failure, as reported by the client.
    pub message: String,
}

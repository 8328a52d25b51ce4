//! Verification outcome accumulation.
//!
//! The checkpoint walk pushes one message per cleared checkpoint and at
//! most one terminating failure into a [`CheckReport`]. The report replaces
//! event-based pass/fail emission: callers read the ordered pass list and
//! the failure from the returned value instead of subscribing anywhere.

use crate::error::BindingError;

/// Outcome of one descriptor verification walk.
///
/// Success is defined structurally: a report succeeds iff no checkpoint
/// recorded a failure. The walk short-circuits, so a failed report carries
/// exactly the passes cleared before the failing checkpoint and nothing
/// after it.
#[derive(Debug, Default)]
pub struct CheckReport {
    passes: Vec<String>,
    failure: Option<BindingError>,
}

impl CheckReport {
    /// Create an empty report with no recorded checkpoints.
    pub fn new() -> Self {
        CheckReport::default()
    }

    /// Record a cleared checkpoint's feedback line.
    pub(crate) fn pass(&mut self, message: impl Into<String>) {
        self.passes.push(message.into());
    }

    /// Record the terminating failure.
    ///
    /// The walk stops at the first failure, so recording a second one is a
    /// checker bug.
    pub(crate) fn fail(&mut self, error: BindingError) {
        debug_assert!(self.failure.is_none(), "checkpoint walk already failed");
        self.failure = Some(error);
    }

    /// Whether every checkpoint cleared.
    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// Feedback lines in the order their checkpoints cleared.
    pub fn passes(&self) -> &[String] {
        &self.passes
    }

    /// The failure that terminated the walk, if any.
    pub fn failure(&self) -> Option<&BindingError> {
        self.failure.as_ref()
    }

    /// Human-readable failure line, if the walk failed.
    pub fn failure_message(&self) -> Option<String> {
        self.failure.as_ref().map(|e| e.to_string())
    }
}

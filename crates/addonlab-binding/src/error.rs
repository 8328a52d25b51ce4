//! Descriptor verification error types.
//!
//! One variant per checkpoint failure, plus the read/parse failures that
//! precede any shape check. Every variant's `Display` output is the exact
//! feedback line shown to the learner, so the messages are part of the
//! contract and covered by tests.

use std::io;

use thiserror::Error;

/// Errors produced while verifying a binding.gyp descriptor.
#[derive(Debug, Error)]
pub enum BindingError {
    /// The descriptor file could not be read.
    #[error("Read binding.gyp ({source})")]
    Read {
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The descriptor is not parsable as the gyp dialect.
    #[error("Parse binding.gyp ({source})")]
    Parse {
        /// Underlying parser failure.
        source: serde_yaml::Error,
    },

    /// The parsed document root is not a mapping.
    #[error("binding.gyp does not contain a parent object ({{ ... }})")]
    MissingRootObject,

    /// `targets` is absent or not a sequence.
    #[error("binding.gyp does not contain a targets array ({{ targets: [ ... ] }})")]
    MissingTargetsArray,

    /// The first target has no string `target_name`.
    #[error("binding.gyp does not contain a target_name for the first target")]
    MissingTargetName,

    /// The first target is not named `myaddon`.
    #[error("binding.gyp does not name the first target \"myaddon\"")]
    WrongTargetName,

    /// The first target has no `sources` sequence.
    #[error("binding.gyp does not contain a sources array for the first target (sources: [ ... ])")]
    MissingSourcesArray,

    /// `sources` does not list `myaddon.cc`.
    #[error("binding.gyp does not list \"myaddon.cc\" in the sources array for the first target")]
    MissingAddonSource,

    /// The first target has no `include_dirs` sequence.
    #[error("binding.gyp does not contain a include_dirs array for the first target (include_dirs: [ ... ])")]
    MissingIncludeDirsArray,

    /// `include_dirs` does not list the canonical NAN include expression.
    #[error("binding.gyp does not list NAN properly in the include_dirs array for the first target")]
    MissingNanInclude,
}

/// Coarse classification of a [`BindingError`].
///
/// Lets callers and tests distinguish I/O, parse, and shape failures
/// without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be read at all.
    Read,
    /// The file was read but is not parsable.
    Parse,
    /// The document parsed but has the wrong shape or values.
    Schema,
}

impl BindingError {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BindingError::Read { .. } => ErrorKind::Read,
            BindingError::Parse { .. } => ErrorKind::Parse,
            _ => ErrorKind::Schema,
        }
    }
}

/// Result type alias for descriptor operations.
pub type BindingResult<T> = Result<T, BindingError>;

//! # addonlab-binding — binding.gyp descriptor verification
//!
//! Verifies that a learner submission's `binding.gyp` declares the shape the
//! native-addon exercise requires: a first target named `myaddon`, compiled
//! from `myaddon.cc`, with the NAN headers resolved through the canonical
//! `include_dirs` entry.
//!
//! ## Checkpoint Walk
//!
//! Verification is an ordered sequence of checkpoints. Each cleared
//! checkpoint records a pass message destined for the learner; the first
//! failed checkpoint terminates the walk with that checkpoint's message and
//! the remaining checkpoints never run. A [`CheckReport`] carries both, so
//! callers replay feedback in order without subscribing to any event
//! channel.
//!
//! ## Descriptor Dialect
//!
//! binding.gyp files are written in the gyp dialect: JSON extended with
//! single-quoted strings and `#` comments. YAML 1.1 is a superset of that
//! dialect, so the loader parses via serde_yaml and converts to
//! `serde_json::Value` for uniform shape checks.

pub mod descriptor;
pub mod error;
pub mod parser;
pub mod report;
pub mod verify;

// Re-export primary types at crate root for ergonomic imports.
pub use descriptor::{
    RawDescriptor, RawTarget, BINDING_FILE, NAN_INCLUDE_DIR, REQUIRED_SOURCE, TARGET_NAME,
};
pub use error::{BindingError, BindingResult, ErrorKind};
pub use report::CheckReport;
pub use verify::{verify_binding, verify_document, CheckOptions};

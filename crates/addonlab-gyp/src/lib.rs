//! # addonlab-gyp — node-gyp rebuild pipeline
//!
//! Drives a full `node-gyp` rebuild of a learner's addon project: the
//! `clean`, `configure`, and `build` commands run strictly in that order,
//! each starting only after the previous one succeeded. The first failure
//! is attributed to its phase and rendered `node-gyp <phase>: <message>`;
//! nothing is retried.
//!
//! ## Working Directory
//!
//! `node-gyp` resolves `binding.gyp` from its working directory, so every
//! child process is spawned with [`std::process::Command::current_dir`]
//! pointed at the project. The working directory of the calling process is
//! never mutated, on any exit path.
//!
//! ## The Client Seam
//!
//! [`GypClient`] abstracts the executable behind one method per command, so
//! the sequencing and attribution logic is testable without a native
//! toolchain installed. [`NodeGyp`] is the process-backed implementation
//! used in production.

pub mod client;
pub mod error;
pub mod phase;
pub mod rebuild;

// Re-export primary types at crate root for ergonomic imports.
pub use client::{GypClient, NodeGyp};
pub use error::{GypError, PhaseError};
pub use phase::Phase;
pub use rebuild::{rebuild, rebuild_in};

//! # addonlab-cli — CLI Tool for the Native-Addon Workshop
//!
//! Provides the `addonlab` command-line interface over the two library
//! crates.
//!
//! ## Subcommands
//!
//! - `addonlab check` — Verify a submission's `binding.gyp` descriptor,
//!   printing per-checkpoint feedback.
//! - `addonlab rebuild` — Run the node-gyp clean/configure/build pipeline
//!   against an addon project directory.
//!
//! ## Exit Codes
//!
//! Every subcommand follows the same convention: 0 on success, 1 when the
//! submission fails verification or a build phase fails, 2 on operational
//! error.

pub mod check;
pub mod rebuild;

//! The three build phases of a rebuild, in pipeline order.

use std::fmt;

/// One `node-gyp` command in the rebuild pipeline.
///
/// The variants are ordered the way the pipeline runs them; iterate
/// [`Phase::SEQUENCE`] rather than hand-listing them at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Remove previous build output.
    Clean,
    /// Generate build files for the current platform.
    Configure,
    /// Compile the addon.
    Build,
}

impl Phase {
    /// Pipeline order: clean, then configure, then build.
    pub const SEQUENCE: [Phase; 3] = [Phase::Clean, Phase::Configure, Phase::Build];

    /// The `node-gyp` subcommand that runs this phase.
    pub fn subcommand(self) -> &'static str {
        match self {
            Phase::Clean => "clean",
            Phase::Configure => "configure",
            Phase::Build => "build",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}

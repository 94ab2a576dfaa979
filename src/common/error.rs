//! Simulator error definitions.
//!
//! Every failure the simulator can report falls into one of a small number
//! of kinds. Each kind is distinguishable so the CLI can report it in its
//! own way: an illegal set size is a configuration problem, a missing file
//! is an I/O problem, and a malformed trace line is a parse problem.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while configuring, loading, or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Associativity outside `1..=max`.
    #[error("Illegal Cache Set Size")]
    Configuration {
        /// The associativity that was asked for.
        requested: i64,
        /// The configured upper bound.
        max: usize,
    },

    /// The trace source could not be opened or read.
    #[error("could not read trace file '{}': {source}", path.display())]
    FileAccess {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A trace line is not a valid integer line identifier.
    #[error("invalid line identifier on line {line_number}: {content:?}")]
    Parse {
        /// 1-based line number in the trace source.
        line_number: usize,
        /// The offending text, as read.
        content: String,
    },

    /// The TOML configuration file could not be read or parsed.
    #[error("invalid configuration file '{}': {message}", path.display())]
    ConfigFile {
        /// Path of the configuration file.
        path: PathBuf,
        /// Reader or deserializer message.
        message: String,
    },

    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

impl SimError {
    /// Returns `true` for configuration errors (bad associativity or config file).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::ConfigFile { .. })
    }
}

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

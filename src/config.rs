use crate::common::{SimError, SimResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default upper bound on the associativity of the simulated set.
pub const MAX_CACHE_CAPACITY: usize = 1000;

const EMPTY_SLOT: &str = "-";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: &Path) -> SimResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SimError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| SimError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Validates a requested associativity against `cache.max_capacity`.
    pub fn associativity(&self, requested: i64) -> SimResult<Associativity> {
        Associativity::new(requested, self.cache.max_capacity)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    #[serde(default = "default_max_capacity")]
    pub max_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_trace_steps")]
    pub trace_steps: bool,

    #[serde(default = "default_empty_slot")]
    pub empty_slot: String,

    #[serde(default)]
    pub summary: SummaryFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trace_steps: default_trace_steps(),
            empty_slot: default_empty_slot(),
            summary: SummaryFormat::default(),
        }
    }
}

/// Rendering of the final hit-ratio summary.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

fn default_max_capacity() -> usize {
    MAX_CACHE_CAPACITY
}

fn default_trace_steps() -> bool {
    true
}

fn default_empty_slot() -> String {
    EMPTY_SLOT.to_string()
}

/// Number of slots in the simulated cache set, known to lie in `1..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Associativity(usize);

impl Associativity {
    /// Checks `requested` against the inclusive range `1..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Configuration`] when the value is zero, negative,
    /// or larger than `max`.
    pub fn new(requested: i64, max: usize) -> SimResult<Self> {
        match usize::try_from(requested) {
            Ok(ways) if (1..=max).contains(&ways) => Ok(Self(ways)),
            _ => Err(SimError::Configuration { requested, max }),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

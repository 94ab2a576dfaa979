//! Simulation statistics collection and reporting.
//!
//! Tracks the hit and access counts of a run. Misses and the hit ratio are
//! derived from those two counters.

use crate::common::AccessOutcome;
use serde::Serialize;
use std::fmt;

/// Hit and access counters for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    hits: u64,
    accesses: u64,
}

impl SimulationStats {
    /// Counts one processed access.
    pub fn record(&mut self, outcome: AccessOutcome) {
        self.accesses += 1;
        if outcome.is_hit() {
            self.hits += 1;
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.accesses - self.hits
    }

    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Hit ratio as a percentage; `0.0` for a run with no accesses.
    pub fn hit_ratio(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            (self.hits as f64 / self.accesses as f64) * 100.0
        }
    }

    /// Serializable snapshot for machine-readable output.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            hits: self.hits,
            misses: self.misses(),
            accesses: self.accesses,
            hit_ratio: self.hit_ratio(),
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cache Hit Ratio: {}/{} = {:.4}%",
            self.hits,
            self.accesses,
            self.hit_ratio()
        )
    }
}

/// Flat view of [`SimulationStats`] with derived fields filled in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    pub hits: u64,
    pub misses: u64,
    pub accesses: u64,
    pub hit_ratio: f64,
}

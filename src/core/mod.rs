//! Simulation core.
//!
//! Holds the cache set model, the OPT victim selection, and the simulator
//! that drives them across a trace.

/// Fixed-capacity associative cache set.
pub mod cache_set;

/// Belady MIN/OPT victim selection.
pub mod policy;

/// Trace replay and per-step event generation.
pub mod simulator;

pub use cache_set::CacheSet;
pub use simulator::{OptSimulator, StepEvent};

//! Simulation input and output.

/// Trace file loading and parsing.
pub mod loader;

/// Step and summary rendering.
pub mod report;

/// Access trace and reuse schedule types.
pub mod trace;

pub use loader::{load_trace, parse_trace, LoadedTrace};
pub use trace::{AccessTrace, ReuseSchedule};

//! Offline-Optimal Cache Simulator Library.
//!
//! This crate replays a known-in-advance sequence of cache-line accesses
//! against a single associative cache set and evicts with Belady's MIN/OPT
//! policy: on a miss in a full set, the resident line whose next access is
//! furthest away (or that is never accessed again) is replaced.
//!
//! # Modules
//!
//! * `common`: Line identifiers, access outcomes, and error handling.
//! * `config`: Configuration loading and associativity validation.
//! * `core`: Cache set, OPT victim selection, and the simulator.
//! * `sim`: Trace loading and report formatting.
//! * `stats`: Hit/miss statistics.
//!
//! # Example
//!
//! ```
//! use opt_cache_sim::config::Associativity;
//! use opt_cache_sim::core::OptSimulator;
//! use opt_cache_sim::sim::AccessTrace;
//!
//! let trace = AccessTrace::new(vec![1, 2, 3, 1, 2, 3]);
//! let ways = Associativity::new(2, 1000).unwrap();
//! let stats = OptSimulator::from_trace(trace, ways).finish();
//! assert_eq!(stats.hits(), 2);
//! ```

/// Shared types and error handling.
///
/// Provides the line identifier type, hit/miss outcomes, next-use keys,
/// and the crate-wide error enum.
pub mod common;

/// Configuration system for capacity limits and reporting options.
///
/// Loads TOML configuration files and validates the requested associativity.
pub mod config;

/// Cache set model and the OPT simulator.
pub mod core;

/// Trace loading and report output.
///
/// Reads access traces from disk and renders simulator events as text.
pub mod sim;

/// Hit and access statistics.
pub mod stats;

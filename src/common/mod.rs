//! Common types used throughout the OPT cache simulator.
//!
//! This module provides the identifier and outcome types shared by the
//! loader, the cache set, and the simulator, along with the crate-wide
//! error type.

/// Line identifiers, access outcomes, and next-use keys.
pub mod data;

/// Error kinds and the crate result alias.
pub mod error;

pub use data::{AccessOutcome, LineId, NextUse};
pub use error::{SimError, SimResult};

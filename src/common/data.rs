//! Access Data Types.
//!
//! This module defines the value types that flow between the trace loader,
//! the cache set, and the OPT simulator: line identifiers, the hit/miss
//! classification of an access, and the next-use key used to rank eviction
//! candidates.

use std::fmt;

/// Identifier of a cache line as it appears in an access trace.
///
/// Any integer is a valid identifier, including negative values. Empty
/// cache slots are represented with `Option::None`, never with a reserved
/// identifier.
pub type LineId = i64;

/// Outcome of a single access against the cache set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessOutcome {
    /// The requested line was already resident.
    Hit,

    /// The requested line had to be loaded, possibly evicting another line.
    Miss,
}

impl AccessOutcome {
    /// Returns `true` for [`AccessOutcome::Hit`].
    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }

    /// Single-letter marker used in the per-step report.
    pub fn marker(self) -> char {
        match self {
            Self::Hit => 'H',
            Self::Miss => 'M',
        }
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.marker())
    }
}

/// Time step at which a line is accessed next.
///
/// Variant order matters: the derived `Ord` places every `At(t)` below
/// `Never`, and orders `At` values by time step. The eviction victim is
/// the resident line with the greatest key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NextUse {
    /// The line is accessed again at this trace position.
    At(usize),

    /// The line never appears again in the remaining trace.
    Never,
}

impl fmt::Display for NextUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(t) => write!(f, "t={t}"),
            Self::Never => f.write_str("never"),
        }
    }
}

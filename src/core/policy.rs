//! Optimal (Belady MIN/OPT) Replacement Policy.
//!
//! This policy evicts the resident line whose next access lies furthest in
//! the future. A line that is never accessed again ranks above every line
//! that is. Among equal keys the first slot in scan order is chosen.

use crate::common::NextUse;
use crate::core::cache_set::CacheSet;
use crate::sim::trace::ReuseSchedule;
use std::cmp::Reverse;

/// Eviction candidate chosen by [`select_victim`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victim {
    /// Slot index to overwrite.
    pub slot: usize,
    /// Next access of the line currently in that slot.
    pub next_use: NextUse,
}

/// Identifies the victim slot to evict.
///
/// `schedule` must already have the current access consumed, so that each
/// queue front is a strictly future time step.
///
/// Returns `None` only when the set holds no lines.
pub fn select_victim(cache: &CacheSet, schedule: &ReuseSchedule) -> Option<Victim> {
    // min_by_key keeps the first of equal elements, so reversing the key
    // yields the first slot with the greatest next use.
    cache
        .residents()
        .map(|(slot, line)| Victim {
            slot,
            next_use: schedule.next_use(line),
        })
        .min_by_key(|victim| Reverse(victim.next_use))
}

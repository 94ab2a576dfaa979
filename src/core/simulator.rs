//! OPT Simulator.
//!
//! Replays an access trace against a single cache set using the optimal
//! offline replacement policy. All run state (trace cursor, reuse schedule,
//! cache set, and counters) is owned by [`OptSimulator`]; independent runs
//! share nothing.
//!
//! # Step order
//!
//! For each access the simulator:
//! 1. Reads the next line `L` from the trace without advancing.
//! 2. Consumes the front of `L`'s reuse queue, since that access is now current.
//! 3. Looks `L` up. A hit leaves the set unchanged. A miss fills a free slot,
//!    or, in a full set, overwrites the line with the furthest next use.
//! 4. Advances the trace cursor and counts the access.
//! 5. Emits a [`StepEvent`].
//!
//! Step 2 must happen before victim selection in step 3, otherwise the
//! current access would be mistaken for a future one.

use crate::common::{AccessOutcome, LineId};
use crate::config::Associativity;
use crate::core::cache_set::CacheSet;
use crate::core::policy::select_victim;
use crate::sim::report::StepSink;
use crate::sim::trace::{AccessTrace, ReuseSchedule};
use std::io;
use crate::stats::SimulationStats;

/// Record of one processed access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent {
    /// Zero-based trace position.
    pub index: usize,
    /// Accessed line.
    pub line: LineId,
    /// Hit or miss.
    pub outcome: AccessOutcome,
    /// Line evicted to make room, on a miss in a full set.
    pub evicted: Option<LineId>,
    /// Cache contents after the access, in slot order.
    pub slots: Vec<Option<LineId>>,
}

/// Owned state of a single OPT simulation run.
#[derive(Debug, Clone)]
pub struct OptSimulator {
    trace: AccessTrace,
    cursor: usize,
    schedule: ReuseSchedule,
    cache: CacheSet,
    stats: SimulationStats,
}

impl OptSimulator {
    /// Creates a run over `trace` with an empty cache set of `ways` slots.
    ///
    /// `schedule` must match `trace`, e.g. from the loader or
    /// [`ReuseSchedule::from_trace`].
    pub fn new(trace: AccessTrace, schedule: ReuseSchedule, ways: Associativity) -> Self {
        Self {
            trace,
            cursor: 0,
            schedule,
            cache: CacheSet::new(ways),
            stats: SimulationStats::default(),
        }
    }

    /// Creates a run, deriving the reuse schedule from the trace.
    pub fn from_trace(trace: AccessTrace, ways: Associativity) -> Self {
        let schedule = ReuseSchedule::from_trace(&trace);
        Self::new(trace, schedule, ways)
    }

    /// Processes the next access, or returns `None` once the trace is exhausted.
    pub fn step(&mut self) -> Option<StepEvent> {
        let index = self.cursor;
        let line = self.trace.get(index)?;

        let consumed = self.schedule.consume(line);
        debug_assert_eq!(consumed, Some(index), "reuse schedule out of step with trace");

        let (outcome, evicted) = if self.cache.contains(line) {
            (AccessOutcome::Hit, None)
        } else if self.cache.insert(line).is_some() {
            (AccessOutcome::Miss, None)
        } else {
            (AccessOutcome::Miss, self.evict_for(line))
        };

        tracing::trace!(
            index,
            line,
            pending = ?self.schedule.pending(line).collect::<Vec<_>>(),
            "reuse schedule after access"
        );

        self.cursor += 1;
        self.stats.record(outcome);

        Some(StepEvent {
            index,
            line,
            outcome,
            evicted,
            slots: self.cache.slots().to_vec(),
        })
    }

    fn evict_for(&mut self, line: LineId) -> Option<LineId> {
        let victim = select_victim(&self.cache, &self.schedule)?;
        let old = self.cache.replace(victim.slot, line)?;
        tracing::debug!(
            index = self.cursor,
            line,
            victim = old,
            slot = victim.slot,
            next_use = %victim.next_use,
            "evicted line"
        );
        Some(old)
    }

    /// Rewinds to the start of the trace with an empty cache and a fresh schedule.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.schedule = ReuseSchedule::from_trace(&self.trace);
        self.cache.flush();
        self.stats = SimulationStats::default();
    }

    /// Runs to the end of the trace, handing every event to `sink`.
    ///
    /// Stops at the first error returned by the sink.
    pub fn run<S>(mut self, sink: &mut S) -> io::Result<SimulationStats>
    where
        S: StepSink + ?Sized,
    {
        while let Some(event) = self.step() {
            sink.step(&event)?;
        }
        Ok(self.stats)
    }

    /// Runs the remaining trace without observing events.
    pub fn finish(mut self) -> SimulationStats {
        while self.step().is_some() {}
        self.stats
    }

    /// Counters for the accesses processed so far.
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Current cache set.
    pub fn cache(&self) -> &CacheSet {
        &self.cache
    }

    /// Current reuse schedule.
    pub fn schedule(&self) -> &ReuseSchedule {
        &self.schedule
    }

    /// Number of accesses not yet processed.
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.cursor
    }
}

impl Iterator for OptSimulator {
    type Item = StepEvent;

    fn next(&mut self) -> Option<StepEvent> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for OptSimulator {}

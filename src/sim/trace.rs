//! Access Trace and Reuse Schedule.
//!
//! The access trace is the chronological list of line identifiers. The
//! reuse schedule indexes the same information by line: for every distinct
//! identifier it holds the ascending queue of trace positions at which that
//! line is accessed. The simulator drains each queue in lockstep with the
//! trace, so the front of a queue is always the line's next future access.

use crate::common::{LineId, NextUse};
use std::collections::{HashMap, VecDeque};

/// Ordered, immutable sequence of accessed line identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessTrace {
    lines: Vec<LineId>,
}

impl AccessTrace {
    /// Wraps a list of line identifiers in trace order.
    pub fn new(lines: Vec<LineId>) -> Self {
        Self { lines }
    }

    /// Number of accesses in the trace.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when the trace has no accesses.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line accessed at time step `t`, if any.
    pub fn get(&self, t: usize) -> Option<LineId> {
        self.lines.get(t).copied()
    }

    /// All accesses in trace order.
    pub fn as_slice(&self) -> &[LineId] {
        &self.lines
    }
}

impl From<Vec<LineId>> for AccessTrace {
    fn from(lines: Vec<LineId>) -> Self {
        Self::new(lines)
    }
}

/// Per-line queues of future access times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReuseSchedule {
    times: HashMap<LineId, VecDeque<usize>>,
}

impl ReuseSchedule {
    /// Builds a fresh schedule covering every position of `trace`.
    pub fn from_trace(trace: &AccessTrace) -> Self {
        let mut schedule = Self::default();
        for (t, &line) in trace.as_slice().iter().enumerate() {
            schedule.record(line, t);
        }
        schedule
    }

    /// Appends time step `t` to the queue of `line`, creating it on first use.
    ///
    /// Callers must record positions in increasing order.
    pub fn record(&mut self, line: LineId, t: usize) {
        self.times.entry(line).or_default().push_back(t);
    }

    /// Removes and returns the front entry of `line`'s queue.
    ///
    /// Called when the access at that time step becomes the present one.
    pub fn consume(&mut self, line: LineId) -> Option<usize> {
        self.times.get_mut(&line).and_then(VecDeque::pop_front)
    }

    /// Next future access of `line`, or [`NextUse::Never`] once its queue is drained.
    pub fn next_use(&self, line: LineId) -> NextUse {
        self.times
            .get(&line)
            .and_then(|q| q.front().copied())
            .map_or(NextUse::Never, NextUse::At)
    }

    /// Remaining access times of `line` in ascending order.
    pub fn pending(&self, line: LineId) -> impl Iterator<Item = usize> + '_ {
        self.times.get(&line).into_iter().flatten().copied()
    }

    /// Number of distinct line identifiers ever recorded.
    pub fn distinct_lines(&self) -> usize {
        self.times.len()
    }

    /// Total number of access times still queued across all lines.
    pub fn remaining(&self) -> usize {
        self.times.values().map(VecDeque::len).sum()
    }
}

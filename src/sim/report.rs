//! Run Reporting.
//!
//! Renders simulator events and the final statistics as text. The simulator
//! itself never prints; callers feed its events through a [`Reporter`].
//!
//! Per-step lines have the form
//!
//! ```text
//! 3)	(1)	1	3	(H)
//! ```
//!
//! i.e. step index, accessed line, one tab-separated column per slot, and
//! the hit/miss marker.

use crate::common::LineId;
use crate::config::{ReportConfig, SummaryFormat};
use crate::core::simulator::StepEvent;
use crate::stats::SimulationStats;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Formats one step as a single report line, without a trailing newline.
pub fn format_step(event: &StepEvent, empty_slot: &str) -> String {
    let mut line = format!("{})\t({})\t", event.index, event.line);
    for slot in &event.slots {
        let _ = write!(line, "{}\t", SlotDisplay(*slot, empty_slot));
    }
    let _ = write!(line, "{}", event.outcome);
    line
}

struct SlotDisplay<'a>(Option<LineId>, &'a str);

impl std::fmt::Display for SlotDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(line) => write!(f, "{line}"),
            None => f.write_str(self.1),
        }
    }
}

/// Consumer of simulator events, fed by [`OptSimulator::run`].
///
/// [`OptSimulator::run`]: crate::core::OptSimulator::run
pub trait StepSink {
    /// Handles one processed access.
    fn step(&mut self, event: &StepEvent) -> io::Result<()>;
}

impl<F: FnMut(&StepEvent)> StepSink for F {
    fn step(&mut self, event: &StepEvent) -> io::Result<()> {
        self(event);
        Ok(())
    }
}

/// Writes step lines and the final summary to an output stream.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    config: ReportConfig,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: ReportConfig) -> Self {
        Self { out, config }
    }

    /// Writes the final summary in the configured format.
    pub fn summary(&mut self, stats: &SimulationStats) -> io::Result<()> {
        match self.config.summary {
            SummaryFormat::Text => {
                if self.config.trace_steps {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{stats}")?;
            }
            SummaryFormat::Json => {
                serde_json::to_writer(&mut self.out, &stats.summary())?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepSink for Reporter<W> {
    /// Writes the line for `event`, unless step tracing is disabled.
    fn step(&mut self, event: &StepEvent) -> io::Result<()> {
        if !self.config.trace_steps {
            return Ok(());
        }
        writeln!(self.out, "{}", format_step(event, &self.config.empty_slot))
    }
}

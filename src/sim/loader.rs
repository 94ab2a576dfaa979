//! Trace Loader.
//!
//! Reads an access trace (one integer line identifier per text line) and
//! builds both the trace itself and the per-line reuse schedule in a single
//! pass. The whole source is consumed before anything is returned, so a
//! malformed line anywhere aborts the load with no partial result.

use crate::common::{LineId, SimError, SimResult};
use crate::sim::trace::{AccessTrace, ReuseSchedule};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A loaded trace together with its matching reuse schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedTrace {
    /// Accesses in chronological order.
    pub trace: AccessTrace,
    /// Future access times, keyed by line.
    pub schedule: ReuseSchedule,
}

/// Loads a trace file from disk.
///
/// # Errors
///
/// * [`SimError::FileAccess`] if the file cannot be opened or read.
/// * [`SimError::Parse`] if a line is not a valid integer.
pub fn load_trace(path: impl AsRef<Path>) -> SimResult<LoadedTrace> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| file_error(path, source))?;

    let loaded = read_lines(BufReader::new(file), path)?;
    tracing::info!(
        path = %path.display(),
        accesses = loaded.trace.len(),
        distinct_lines = loaded.schedule.distinct_lines(),
        "loaded access trace"
    );
    Ok(loaded)
}

/// Parses a trace from any buffered reader.
///
/// Read failures are reported as [`SimError::FileAccess`] with an empty path.
pub fn parse_trace<R: BufRead>(reader: R) -> SimResult<LoadedTrace> {
    read_lines(reader, Path::new(""))
}

fn read_lines<R: BufRead>(reader: R, path: &Path) -> SimResult<LoadedTrace> {
    let mut lines = Vec::new();
    let mut schedule = ReuseSchedule::default();

    for (t, line) in reader.lines().enumerate() {
        let text = line.map_err(|source| file_error(path, source))?;
        let id = parse_line_id(&text, t + 1)?;
        schedule.record(id, t);
        lines.push(id);
    }

    Ok(LoadedTrace {
        trace: AccessTrace::new(lines),
        schedule,
    })
}

fn parse_line_id(text: &str, line_number: usize) -> SimResult<LineId> {
    text.trim().parse().map_err(|_| SimError::Parse {
        line_number,
        content: text.to_string(),
    })
}

fn file_error(path: &Path, source: io::Error) -> SimError {
    SimError::FileAccess {
        path: PathBuf::from(path),
        source,
    }
}

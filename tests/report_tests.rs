//! Integration tests for report formatting and statistics.

use opt_cache_sim::common::AccessOutcome;
use opt_cache_sim::config::{ReportConfig, SummaryFormat};
use opt_cache_sim::config::Associativity;
use opt_cache_sim::core::{OptSimulator, StepEvent};
use opt_cache_sim::sim::report::{format_step, Reporter, StepSink};
use opt_cache_sim::sim::AccessTrace;
use std::io::{self, Write};
use opt_cache_sim::stats::SimulationStats;

/// Creates statistics with the given hit and miss counts.
fn create_stats(hits: u64, misses: u64) -> SimulationStats {
    let mut stats = SimulationStats::default();
    for _ in 0..hits {
        stats.record(AccessOutcome::Hit);
    }
    for _ in 0..misses {
        stats.record(AccessOutcome::Miss);
    }
    stats
}

/// Tests derived statistics.
#[test]
fn test_stats_derived_fields() {
    let stats = create_stats(3, 1);

    assert_eq!(stats.hits(), 3);
    assert_eq!(stats.misses(), 1);
    assert_eq!(stats.accesses(), 4);
    assert_eq!(stats.hit_ratio(), 75.0);
}

/// Tests the zero-access ratio guard.
#[test]
fn test_stats_zero_accesses() {
    let stats = SimulationStats::default();

    assert_eq!(stats.hit_ratio(), 0.0);
    assert_eq!(stats.to_string(), "Cache Hit Ratio: 0/0 = 0.0000%");
}

/// Tests the summary line format.
#[test]
fn test_stats_display() {
    assert_eq!(
        create_stats(2, 4).to_string(),
        "Cache Hit Ratio: 2/6 = 33.3333%"
    );
}

/// Tests step line formatting with empty slots.
#[test]
fn test_format_step() {
    let event = StepEvent {
        index: 0,
        line: 1,
        outcome: AccessOutcome::Miss,
        evicted: None,
        slots: vec![Some(1), None, None],
    };

    assert_eq!(format_step(&event, "-"), "0)\t(1)\t1\t-\t-\t(M)");
    assert_eq!(format_step(&event, "."), "0)\t(1)\t1\t.\t.\t(M)");
}

/// Tests step line formatting for a hit with negative identifiers.
#[test]
fn test_format_step_hit() {
    let event = StepEvent {
        index: 12,
        line: -4,
        outcome: AccessOutcome::Hit,
        evicted: None,
        slots: vec![Some(-4), Some(0)],
    };

    assert_eq!(format_step(&event, "-"), "12)\t(-4)\t-4\t0\t(H)");
}

/// Tests the full text report.
#[test]
fn test_reporter_text() {
    let mut reporter = Reporter::new(Vec::new(), ReportConfig::default());
    let event = StepEvent {
        index: 0,
        line: 5,
        outcome: AccessOutcome::Miss,
        evicted: None,
        slots: vec![Some(5)],
    };

    reporter.step(&event).unwrap();
    reporter.summary(&create_stats(0, 1)).unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(out, "0)\t(5)\t5\t(M)\n\nCache Hit Ratio: 0/1 = 0.0000%\n");
}

/// Tests that disabling step tracing leaves only the summary.
#[test]
fn test_reporter_quiet() {
    let config = ReportConfig {
        trace_steps: false,
        ..ReportConfig::default()
    };
    let mut reporter = Reporter::new(Vec::new(), config);
    let event = StepEvent {
        index: 0,
        line: 5,
        outcome: AccessOutcome::Miss,
        evicted: None,
        slots: vec![Some(5)],
    };

    reporter.step(&event).unwrap();
    reporter.summary(&create_stats(1, 1)).unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(out, "Cache Hit Ratio: 1/2 = 50.0000%\n");
}

/// Tests the JSON summary.
#[test]
fn test_reporter_json() {
    let config = ReportConfig {
        trace_steps: false,
        summary: SummaryFormat::Json,
        ..ReportConfig::default()
    };
    let mut reporter = Reporter::new(Vec::new(), config);

    reporter.summary(&create_stats(1, 3)).unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["hits"], 1);
    assert_eq!(value["misses"], 3);
    assert_eq!(value["accesses"], 4);
    assert_eq!(value["hit_ratio"], 25.0);
}

/// Tests a reporter driven by a simulator run through the sink interface.
#[test]
fn test_reporter_as_run_sink() {
    let ways = Associativity::new(2, 1000).unwrap();
    let sim = OptSimulator::from_trace(AccessTrace::new(vec![1, 2, 1]), ways);
    let mut reporter = Reporter::new(Vec::new(), ReportConfig::default());

    let stats = sim.run(&mut reporter).unwrap();
    reporter.summary(&stats).unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        out,
        "0)\t(1)\t1\t-\t(M)\n\
         1)\t(2)\t1\t2\t(M)\n\
         2)\t(1)\t1\t2\t(H)\n\
         \n\
         Cache Hit Ratio: 1/3 = 33.3333%\n"
    );
}

/// Writer that rejects every write.
struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Tests that a sink error stops the run and is returned.
#[test]
fn test_run_stops_on_sink_error() {
    let ways = Associativity::new(1, 1000).unwrap();
    let sim = OptSimulator::from_trace(AccessTrace::new(vec![1, 2]), ways);
    let mut reporter = Reporter::new(FailingWriter, ReportConfig::default());

    let err = sim.run(&mut reporter).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

/// Tests that a sink can be used as a trait object.
#[test]
fn test_dyn_step_sink() {
    let mut count = 0usize;
    {
        let mut counter = |_: &StepEvent| count += 1;
        let sink: &mut dyn StepSink = &mut counter;
        let ways = Associativity::new(2, 1000).unwrap();
        let stats = OptSimulator::from_trace(AccessTrace::new(vec![4, 4, 5]), ways)
            .run(sink)
            .unwrap();
        assert_eq!(stats.hits(), 1);
    }
    assert_eq!(count, 3);
}

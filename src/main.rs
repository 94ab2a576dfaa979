//! OPT Cache Simulator CLI.
//!
//! The main executable for the simulator. It parses the command line,
//! validates the requested set size, loads the trace, and prints one line
//! per access followed by the hit-ratio summary.
//!
//! # Usage
//!
//! ```text
//! optsim <TRACE_FILE> <ASSOCIATIVITY> [--config <toml>] [--max-capacity <n>] [--quiet] [--json]
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`.

use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use opt_cache_sim::common::{SimError, SimResult};
use opt_cache_sim::config::{Config, SummaryFormat};
use opt_cache_sim::core::OptSimulator;
use opt_cache_sim::sim::loader::{self, LoadedTrace};
use opt_cache_sim::sim::report::Reporter;

/// Command-line arguments for the OPT cache simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Belady MIN/OPT Cache Set Simulator")]
struct Args {
    /// Trace file with one integer line identifier per line.
    trace_file: PathBuf,

    /// Number of slots in the simulated cache set.
    #[arg(allow_negative_numbers = true)]
    associativity: i64,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upper bound on the associativity, overriding the configuration.
    #[arg(long)]
    max_capacity: Option<usize>,

    /// Print only the summary.
    #[arg(short, long)]
    quiet: bool,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

/// Main entry point for the OPT cache simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Loads the optional TOML file and applies CLI overrides.
/// 2. **Validation**: Rejects an illegal set size before touching the trace.
/// 3. **Loader**: Reads the whole trace and its reuse schedule into memory.
/// 4. **Simulation Loop**: Replays every access and prints its step line.
/// 5. **Teardown**: Prints the summary. Exits 2 on configuration errors, 1 on others.
fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        match e {
            SimError::Configuration { .. } => println!("{e}"),
            _ => eprintln!("[!] {e}"),
        }
        process::exit(if e.is_configuration() { 2 } else { 1 });
    }
}

fn run(args: &Args) -> SimResult<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(max) = args.max_capacity {
        config.cache.max_capacity = max;
    }
    if args.quiet {
        config.report.trace_steps = false;
    }
    if args.json {
        config.report.summary = SummaryFormat::Json;
    }

    let ways = config.associativity(args.associativity)?;
    let LoadedTrace { trace, schedule } = loader::load_trace(&args.trace_file)?;

    let mut reporter = Reporter::new(BufWriter::new(io::stdout().lock()), config.report);
    let stats = OptSimulator::new(trace, schedule, ways).run(&mut reporter)?;
    reporter.summary(&stats)?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

//! handsynth - hand gesture bridge
//!
//! Reads hand landmarks as JSON lines, runs the controller, and writes the
//! resulting engine commands as JSON lines on stdout.
//!
//! Run with: cargo run -- --input frames.jsonl

mod input;
mod output;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use handsynth::engine::command_queue;
use handsynth::{ControlConfig, Controller, TickReport};

#[derive(Parser, Debug)]
#[command(name = "handsynth", version, about = "Hand landmarks in, synth commands out")]
struct Cli {
    /// TOML controller config (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON-lines landmark file (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Capacity of the command queue to the writer thread
    #[arg(long, default_value_t = 256)]
    queue_capacity: usize,

    /// Don't play the first chord before the first frame
    #[arg(long)]
    no_initial_chord: bool,
}

#[derive(Debug, Default)]
struct Stats {
    frames: u64,
    skipped: u64,
    dispatched: u64,
    failed: u64,
}

impl Stats {
    fn record(&mut self, report: &TickReport) {
        self.frames += 1;
        self.dispatched += report.dispatched.len() as u64;
        self.failed += report.failures.len() as u64;
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("handsynth=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ControlConfig::load(path)
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => ControlConfig::default(),
    };
    let mut controller = Controller::new(config).wrap_err("invalid controller config")?;

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let (mut tx, rx) = command_queue(cli.queue_capacity.max(1));
    let writer = output::spawn_writer(rx);

    info!(
        bindings = controller.config().percussion.len(),
        chords = controller.chords().progression().len(),
        "controller ready"
    );

    if !cli.no_initial_chord {
        if let Err(err) = controller.start(&mut tx) {
            warn!(%err, "initial chord dropped");
        }
    }

    let started = Instant::now();
    let mut stats = Stats::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.wrap_err("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = match input::parse_line(&line) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(line = line_no + 1, "skipping frame: {err:#}");
                stats.skipped += 1;
                continue;
            }
        };

        let now = frame.timestamp.unwrap_or_else(|| started.elapsed());
        let report = controller.tick(frame.first, frame.second, now, &mut tx);
        stats.record(&report);
    }

    // Dropping the producer lets the writer drain and exit
    drop(tx);
    let written = writer
        .join()
        .map_err(|_| eyre!("command writer panicked"))?
        .wrap_err("failed to write commands")?;

    info!(
        frames = stats.frames,
        skipped = stats.skipped,
        dispatched = stats.dispatched,
        failed = stats.failed,
        written,
        "input exhausted"
    );
    Ok(())
}

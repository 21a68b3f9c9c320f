//! adventure-world — headless driver for the Adventure World park simulation.
//!
//! ```text
//! adventure-world                              # default layout, default parameters
//! adventure-world -f map.csv -p params.csv     # batch mode from files
//! adventure-world --seed 42 --ticks 1000 --output-dir out --summary-json out/summary.json
//! ```

mod progress;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use park_agents::{RideSpec, RoamingBehavior};
use park_config::{default_rides, load_map, load_params};
use park_core::ParkConfig;
use park_output::{CsvWriter, OutputWriter, StatsObserver};
use park_sim::{NoopObserver, Summary, World, WorldBuilder};
use tracing_subscriber::EnvFilter;

use progress::Progress;

// ── Command line ──────────────────────────────────────────────────────────────

/// Adventure World theme-park simulation
#[derive(Parser, Debug)]
#[command(name = "adventure-world", version)]
struct Cli {
    /// Park map CSV: kind,x,y,param1,param2,capacity,duration[,name]
    #[arg(short = 'f', long = "map")]
    map: Option<PathBuf>,

    /// Run-parameter CSV: key,value
    #[arg(short = 'p', long = "params")]
    params: Option<PathBuf>,

    /// Random seed for a reproducible run (overrides the parameter file)
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate (overrides `max_timesteps`)
    #[arg(long)]
    ticks: Option<u64>,

    /// Write tick statistics and snapshots into this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Snapshot rides and patrons every N ticks; 0 writes statistics only
    #[arg(long, default_value_t = 1)]
    snapshot_interval: u64,

    /// Write output.db instead of CSV files (requires --output-dir)
    #[cfg(feature = "sqlite")]
    #[arg(long, requires = "output_dir")]
    sqlite: bool,

    /// Write the final summary as JSON to this file
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Log spawns, departures and ride placement
    #[arg(short, long)]
    verbose: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = park_config(&cli)?;
    let rides = park_rides(&cli)?;

    println!("{}", "=".repeat(60));
    println!("ADVENTURE WORLD");
    println!("{}", "=".repeat(60));

    let mut world = WorldBuilder::new(config, RoamingBehavior)
        .rides(rides)
        .build()
        .context("building the park")?;

    for rejected in world.rejected_rides() {
        println!("Warning: Could not add {} due to overlap", rejected.spec.display_name());
    }
    println!(
        "Park loaded with {} rides and {} patrons!",
        world.rides().len(),
        world.patrons().len()
    );
    println!("Running {} ticks...", world.config.max_ticks);

    let t0 = Instant::now();
    let summary = run(&mut world, &cli)?;
    tracing::info!(elapsed_s = t0.elapsed().as_secs_f64(), "run finished");

    println!("{summary}");

    if let Some(path) = &cli.summary_json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nSummary written to: {}", path.display());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parameters from `-p` (or the defaults), with command-line overrides applied.
fn park_config(cli: &Cli) -> Result<ParkConfig> {
    let mut config = match &cli.params {
        Some(path) => load_params(path)
            .with_context(|| format!("loading parameters {}", path.display()))?,
        None => ParkConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(ticks) = cli.ticks {
        config.max_ticks = ticks;
    }
    config.output_interval_ticks = cli.snapshot_interval;
    Ok(config)
}

/// Rides from `-f`, or the default layout.
fn park_rides(cli: &Cli) -> Result<Vec<RideSpec>> {
    match &cli.map {
        Some(path) => load_map(path).with_context(|| format!("loading map {}", path.display())),
        None => Ok(default_rides()),
    }
}

// ── Running ───────────────────────────────────────────────────────────────────

fn run(world: &mut World<RoamingBehavior>, cli: &Cli) -> Result<Summary> {
    let max_ticks = world.config.max_ticks;
    let Some(dir) = &cli.output_dir else {
        return Ok(world.run(&mut Progress::new(NoopObserver, max_ticks))?);
    };

    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    #[cfg(feature = "sqlite")]
    {
        if cli.sqlite {
            return run_with_writer(world, park_output::SqliteWriter::new(dir)?);
        }
    }

    let summary = run_with_writer(world, CsvWriter::new(dir)?)?;
    println!("Output written to: {}", dir.display());
    Ok(summary)
}

fn run_with_writer<W: OutputWriter>(world: &mut World<RoamingBehavior>, writer: W) -> Result<Summary> {
    let mut observer = Progress::new(StatsObserver::new(writer), world.config.max_ticks);
    let summary = world.run(&mut observer)?;
    if let Some(e) = observer.inner.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(summary)
}

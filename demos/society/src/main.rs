//! society — two humans looking after their needs in a small world.
//!
//! Usage: `society [config.json] [geography.csv]`
//!
//! Without arguments the default scenario runs: a 100×100 world with two
//! forests, two lakes and two humans, for 100 ticks.  Agent snapshots and
//! tick summaries are written to `output/society/`.  Set `RUST_LOG` to
//! change log verbosity (default `society=info,soc_sim=info`).

mod behavior;
mod scenario;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use soc_agent::HumanBuilder;
use soc_core::{SimConfig, Tick};
use soc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use soc_sim::{RenderBuffer, SimObserver, Snapshot, TickSummary, WorldBuilder};
use soc_spatial::load_geography_csv;

use behavior::Greedy;
use scenario::{HUMAN_STARTS, build_geography};

const OUTPUT_DIR: &str = "output/society";

/// Below this satisfaction a human looks for something to do.
const COMFORT_THRESHOLD: f64 = 60.0;

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    completed:     usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, completed: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summary_rows += 1;
        self.completed += summary.completed;
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot<'_>) {
        self.snapshot_rows += snapshot.humans.len();
        self.inner.on_snapshot(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&String>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let config: SimConfig = serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("society=info,soc_sim=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // 1. Config.
    let config = load_config(args.first())?;
    config.validate()?;

    // 2. Geography.
    let geography = match args.get(1) {
        Some(path) => load_geography_csv(Path::new(path), config.world_size)
            .with_context(|| format!("loading geography {path}"))?,
        None => build_geography(config.world_size)?,
    };
    info!(
        forests = geography.forests().len(),
        lakes = geography.lakes().len(),
        size = geography.size(),
        "geography ready"
    );

    // 3. World.
    let mut world = WorldBuilder::new(config, geography)
        .humans(HUMAN_STARTS.into_iter().map(HumanBuilder::new))
        .behavior(Greedy { threshold: COMFORT_THRESHOLD })
        .build()?;

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR), world.needs())?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    world.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output incomplete");
    }

    info!(
        ticks = world.clock().elapsed(),
        completed = obs.completed,
        seconds = elapsed.as_secs_f64(),
        "simulation complete"
    );
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 6. Final state table.
    let mut buf = RenderBuffer::new();
    world.fill_render_buffer(&mut buf);

    let needs = world.needs();
    print!("{:<6} {:>8} {:>8}", "Agent", "x", "y");
    for need in needs {
        print!(" {:>8}", need.name);
    }
    println!();
    println!("{}", "-".repeat(24 + 9 * needs.len()));
    for (i, [x, y]) in buf.positions.iter().enumerate() {
        print!("{i:<6} {x:>8.2} {y:>8.2}");
        for value in buf.satisfaction_of(i).unwrap_or_default() {
            print!(" {value:>8.1}");
        }
        println!();
    }

    Ok(())
}

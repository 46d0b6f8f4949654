//! baseline — the canonical scenario for the rust_swarm framework.
//!
//! Runs 50 agents in a 100×100 world for 200 simulated time units against a
//! five-slot recharge station and prints the end-of-run report.  Pass a path
//! to a JSON file with the same fields as `SimConfig` to run a different
//! scenario:
//!
//! ```text
//! cargo run -p baseline -- my_scenario.json
//! ```

use std::time::Instant;

use anyhow::{Context, Result};

use swarm_core::{SimConfig, Tick};
use swarm_sim::{SimBuilder, SimObserver};

/// Prints a one-line progress note every `interval` ticks.
struct ProgressPrinter {
    interval: u64,
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, requests: usize) {
        if self.interval > 0 && tick.0 % self.interval == 0 {
            println!("{tick}: {requests} recharge requests");
        }
    }
}

fn load_config() -> Result<SimConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading scenario file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing scenario file {path}"))
        }
        None => Ok(SimConfig::baseline()),
    }
}

fn main() -> Result<()> {
    let config = load_config()?;
    let ticks = config.total_ticks();

    let mut sim = SimBuilder::new(config).build()?;
    let mut progress = ProgressPrinter { interval: ticks / 4 };

    let started = Instant::now();
    let report = sim.run(&mut progress);
    let elapsed = started.elapsed();

    println!("{report}");
    println!("({ticks} ticks in {elapsed:.2?})");
    Ok(())
}

//! petri — a dish-sized outbreak scenario for the pandemic simulation.
//!
//! Scatters a population of wandering agents across a 640×480 arena, seeds a
//! handful of infections, and runs the epidemic to completion with CSV
//! output.  The run is fully deterministic for a given SEED.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use pandemic_agent::{AgentSeed, PopulationBuilder};
use pandemic_core::{Arena, SimConfig, SimRng, Status, Tick};
use pandemic_engine::{AggregateCounts, DiseaseConfig};
use pandemic_output::{CsvWriter, SimOutputObserver};
use pandemic_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 120;
const SICK_SEEDS: usize = 3;
const SEED: u64 = 42;

const ARENA_WIDTH: f64 = 640.0;
const ARENA_HEIGHT: f64 = 480.0;
const AGENT_RADIUS: f64 = 5.0;
const AGENT_SPEED: f64 = 2.0;

const SICK_PROBABILITY: f64 = 0.25;
const DEATH_PROBABILITY: f64 = 0.05;
const HEALING_DURATION_TICKS: u64 = 200;

const TOTAL_TICKS: u64 = 2_000;
const OUTPUT_INTERVAL_TICKS: u64 = 20;

// ── Observer wrapper: note when the outbreak burns out ───────────────────────

struct OutbreakWatch<O: SimObserver> {
    inner: O,
    ended_at: Option<Tick>,
}

impl<O: SimObserver> OutbreakWatch<O> {
    fn new(inner: O) -> Self {
        Self {
            inner,
            ended_at: None,
        }
    }
}

impl<O: SimObserver> SimObserver for OutbreakWatch<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, counts: AggregateCounts) {
        if self.ended_at.is_none() && counts.sick == 0 {
            self.ended_at = Some(tick);
        }
        self.inner.on_tick_end(tick, counts);
    }

    fn on_snapshot(
        &mut self,
        tick: Tick,
        population: &pandemic_agent::Population,
        tracker: &pandemic_engine::EpidemicTracker,
    ) {
        self.inner.on_snapshot(tick, population, tracker);
    }

    fn on_sim_end(
        &mut self,
        final_tick: Tick,
        population: &pandemic_agent::Population,
        tracker: &pandemic_engine::EpidemicTracker,
    ) {
        self.inner.on_sim_end(final_tick, population, tracker);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== petri — pandemic simulation ===");
    println!("Agents: {AGENT_COUNT}  |  Seeded sick: {SICK_SEEDS}  |  Seed: {SEED}");
    println!();

    // 1. Scenario geometry and disease parameters.
    let arena = Arena::new(ARENA_WIDTH, ARENA_HEIGHT);
    let disease = DiseaseConfig {
        sick_probability: SICK_PROBABILITY,
        death_probability: DEATH_PROBABILITY,
        healing_duration_ticks: HEALING_DURATION_TICKS,
    };

    // 2. Scatter the population with a deterministic setup RNG.  The first
    //    SICK_SEEDS agents are the seeded outbreak.
    let mut setup_rng = SimRng::new(SEED);
    let mut builder = PopulationBuilder::new(arena, SEED);
    for i in 0..AGENT_COUNT {
        builder = builder.agent(AgentSeed {
            x: setup_rng.gen_range(AGENT_RADIUS..ARENA_WIDTH - AGENT_RADIUS),
            y: setup_rng.gen_range(AGENT_RADIUS..ARENA_HEIGHT - AGENT_RADIUS),
            heading_deg: setup_rng.gen_range(0.0..360.0),
            speed: AGENT_SPEED,
            radius: AGENT_RADIUS,
            status: if i < SICK_SEEDS {
                Status::Sick
            } else {
                Status::Healthy
            },
        });
    }
    let (population, rngs) = builder.build()?;

    // 3. Sim config.
    let config = SimConfig {
        start_unix_secs: 1_700_000_000,
        tick_duration_secs: 1,
        total_ticks: TOTAL_TICKS,
        seed: SEED,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    println!(
        "Arena: {arena}  |  Ticks: {TOTAL_TICKS}  |  snapshot every {OUTPUT_INTERVAL_TICKS}"
    );
    println!(
        "Disease: p(sick)={SICK_PROBABILITY}  p(death)={DEATH_PROBABILITY}  healing={HEALING_DURATION_TICKS} ticks"
    );
    println!();

    // 4. Build sim.
    let mut sim = SimBuilder::new(config.clone(), arena, disease, population, rngs).build()?;

    // 5. Set up CSV output.
    std::fs::create_dir_all("output/petri")?;
    let writer = CsvWriter::new(Path::new("output/petri"))?;
    let mut obs = OutbreakWatch::new(SimOutputObserver::new(writer, &config));

    // 6. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    let counts = sim.tracker.snapshot();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    match obs.ended_at {
        Some(tick) => println!("Outbreak burned out at {tick}"),
        None => println!("Outbreak still active at the end of the run"),
    }
    println!();
    println!("{:<10} {:>8}", "Status", "Count");
    println!("{}", "-".repeat(20));
    println!("{:<10} {:>8}", "healthy", counts.healthy);
    println!("{:<10} {:>8}", "sick", counts.sick);
    println!("{:<10} {:>8}", "cured", counts.cured);
    println!("{:<10} {:>8}", "dead", counts.dead);
    println!();
    println!(
        "History records: {} sick, {} cured, {} dead (output/petri/status_history.csv)",
        sim.tracker.history(Status::Sick).len(),
        sim.tracker.history(Status::Cured).len(),
        sim.tracker.history(Status::Dead).len(),
    );

    Ok(())
}

//! The `Sim` struct and its tick loop.

use pandemic_agent::{AgentRngs, Population};
use pandemic_core::{AgentId, SimClock, SimConfig, Tick};
use pandemic_engine::{DiseaseModel, EpidemicTracker};

use crate::SimObserver;

/// The main simulation runner.
///
/// Holds all run state and drives the tick loop.  Every tick, each agent is
/// advanced once through the disease state machine, in ascending `AgentId`
/// order — the population's insertion order.  The fields are public for
/// read access between ticks (positions and statuses for rendering, the
/// tracker for charting); nothing external writes agent state during a run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, output interval, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// All agent state, indexed by `AgentId`.
    pub population: Population,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// The parameterized epidemic state machine.
    pub model: DiseaseModel,

    /// Live counts per status and the per-status transition history.
    pub tracker: EpidemicTracker,
}

impl Sim {
    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.tick_once(now, observer);
        }
        observer.on_sim_end(self.clock.current_tick, &self.population, &self.tracker);
        log::info!(
            "run complete at {}: {:?}",
            self.clock.current_tick,
            self.tracker.snapshot()
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick_once(now, observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_once<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);
        self.process_tick(now);
        observer.on_tick_end(now, self.tracker.snapshot());
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.population, &self.tracker);
        }
        self.clock.advance();
    }

    /// Advance every agent once, in population order.
    ///
    /// The disease model only ever writes the advancing agent's own state
    /// (plus the tracker).  The live population is iterated in place: an
    /// agent later in the order reads the moved positions of earlier agents
    /// this tick.
    fn process_tick(&mut self, now: Tick) {
        for i in 0..self.population.len() as u32 {
            let agent = AgentId(i);
            let rng = self.rngs.get_mut(agent);
            self.model
                .advance(agent, &mut self.population, now, rng, &mut self.tracker);
        }
    }
}

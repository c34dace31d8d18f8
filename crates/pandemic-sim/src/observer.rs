//! Simulation observer trait for progress reporting and data collection.

use pandemic_agent::Population;
use pandemic_core::Tick;
use pandemic_engine::{AggregateCounts, EpidemicTracker};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The hooks fire between ticks — the
/// only moments when the population is in a consistent state.
///
/// # Example — outbreak printer
///
/// ```rust,ignore
/// struct OutbreakPrinter;
///
/// impl SimObserver for OutbreakPrinter {
///     fn on_tick_end(&mut self, tick: Tick, counts: AggregateCounts) {
///         if counts.sick == 0 {
///             println!("{tick}: outbreak over ({} dead)", counts.dead);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent advances.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the current counts snapshot.
    fn on_tick_end(&mut self, _tick: Tick, _counts: AggregateCounts) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the full population and tracker so
    /// output writers can record positions and statuses without the sim
    /// knowing about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _population: &Population, _tracker: &EpidemicTracker) {}

    /// Called once after the final tick completes, with the same read-only
    /// access as a snapshot so writers can flush end-of-run data (e.g. the
    /// tracker's full history).
    fn on_sim_end(&mut self, _final_tick: Tick, _population: &Population, _tracker: &EpidemicTracker) {
    }
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! `pandemic-sim` — tick loop orchestrator for the pandemic simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① on_tick_start
//!   ② advance every agent once, in ascending AgentId order, through the
//!      disease state machine (Dead agents no-op inside the machine)
//!   ③ on_tick_end with the current counts snapshot
//!   ④ on_snapshot every output_interval_ticks
//! ```
//!
//! Everything runs on the calling thread.  Within a tick, an agent sees the
//! already-advanced state of agents earlier in the order and the stale state
//! of later ones; the only write any step performs outside the advancing
//! agent is the tracker update.  Concurrent readers (a renderer, say) must
//! treat a tick's mutations as non-atomic and read only between ticks — the
//! observer hooks are exactly those points.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pandemic_agent::PopulationBuilder;
//! use pandemic_sim::{NoopObserver, SimBuilder};
//!
//! let (pop, rngs) = PopulationBuilder::new(arena, seed) /* .agent(…) × n */ .build()?;
//! let mut sim = SimBuilder::new(config, arena, disease, pop, rngs).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{:?}", sim.tracker.snapshot());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;

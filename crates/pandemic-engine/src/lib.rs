//! `pandemic-engine` — the simulation core: movement, contact detection, and
//! the infection state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`kinematics`] | `Kinematics` — heading/speed movement, boundary reflection |
//! | [`collision`]  | `overlapping` — all-pairs circle intersection query        |
//! | [`disease`]    | `DiseaseConfig`, `DiseaseModel` — the per-agent state machine |
//! | [`tracker`]    | `EpidemicTracker`, `AggregateCounts`, `HistoryRecord`      |
//! | [`error`]      | `ConfigError`                                              |
//!
//! # Per-agent advance
//!
//! ```text
//! DiseaseModel::advance(agent):
//!   ① Dead     → no-op (no movement, no checks)
//!   ② move     → Kinematics::advance (candidate committed, heading reflected)
//!   ③ Healthy  → scan overlaps in population order; first Sick contact whose
//!                Bernoulli(sick_probability) draw succeeds infects — once
//!   ④ Sick     → past the healing duration, Bernoulli(death_probability)
//!                picks Dead vs. Cured — exactly one resolution ever
//!   ⑤ Cured    → keeps wandering; never re-enters Sick
//! ```
//!
//! One parameterized model covers everything from wander-only
//! (`sick_probability = 0`) to full infection/healing/death dynamics;
//! behavior is selected by the config values, not by swapping engines.
//!
//! Only the agent being advanced ever writes its own status.  Other agents
//! are read through the collision scan but never mutated, so infection is a
//! property of being near a Sick agent, decided from each agent's own
//! perspective.

pub mod collision;
pub mod disease;
pub mod error;
pub mod kinematics;
pub mod tracker;


pub use collision::{circles_touch, overlapping};
pub use disease::{DiseaseConfig, DiseaseModel};
pub use error::ConfigError;
pub use kinematics::Kinematics;
pub use tracker::{AggregateCounts, EpidemicTracker, HistoryRecord};

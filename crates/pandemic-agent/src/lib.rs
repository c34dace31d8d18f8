//! `pandemic-agent` — Structure-of-Arrays population storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`store`]   | `Population` (SoA arrays), `AgentRngs` (per-agent RNG)  |
//! | [`builder`] | `PopulationBuilder`, `AgentSeed` (validated setup)      |
//! | [`error`]   | `PopulationError`, `PopulationResult<T>`                |
//!
//! The population is created once at scenario setup and its size is fixed
//! for the run; Dead agents stay in the arrays, frozen, so `AgentId`s remain
//! stable indices throughout.

pub mod builder;
pub mod error;
pub mod store;


pub use builder::{AgentSeed, PopulationBuilder};
pub use error::{PopulationError, PopulationResult};
pub use store::{AgentRngs, Population};

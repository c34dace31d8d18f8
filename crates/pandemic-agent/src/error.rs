//! Scenario-setup validation errors.
//!
//! All variants are fatal to starting a run; there is no degenerate-run
//! fallback.  Mid-run invariant violations are programming defects handled
//! by assertions in the engine crate, not by this enum.

use pandemic_core::{AgentId, Arena, Status};
use thiserror::Error;

/// Rejected population setup.
#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("population must contain at least one agent")]
    Empty,

    #[error("agent {agent}: radius {radius} must be positive and finite")]
    InvalidRadius { agent: AgentId, radius: f64 },

    #[error("agent {agent}: radius {radius} does not fit inside arena {arena}")]
    RadiusExceedsArena {
        agent: AgentId,
        radius: f64,
        arena: Arena,
    },

    #[error("agent {agent}: speed {speed} must be non-negative and finite")]
    InvalidSpeed { agent: AgentId, speed: f64 },

    #[error("agent {agent}: initial status {status} is terminal; agents start Healthy or Sick")]
    TerminalSeedStatus { agent: AgentId, status: Status },
}

/// Shorthand result type for population construction.
pub type PopulationResult<T> = Result<T, PopulationError>;

//! Fluent builder for constructing a validated `Population` + `AgentRngs`.
//!
//! # Usage
//!
//! ```rust
//! use pandemic_agent::{AgentSeed, PopulationBuilder};
//! use pandemic_core::{Arena, Status};
//!
//! let (pop, rngs) = PopulationBuilder::new(Arena::new(640.0, 480.0), 42)
//!     .agent(AgentSeed { x: 100.0, y: 100.0, heading_deg: 45.0, speed: 2.0, radius: 8.0, status: Status::Sick })
//!     .agent(AgentSeed { x: 300.0, y: 200.0, heading_deg: 200.0, speed: 2.0, radius: 8.0, status: Status::Healthy })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(pop.len(), 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use pandemic_core::{AgentId, Arena, Status, Tick};

use crate::{AgentRngs, Population, PopulationError, PopulationResult};

/// Initial state for one agent, supplied by scenario setup.
#[derive(Copy, Clone, Debug)]
pub struct AgentSeed {
    pub x: f64,
    pub y: f64,
    pub heading_deg: f64,
    pub speed: f64,
    pub radius: f64,
    /// `Healthy`, or `Sick` for the seeded outbreak set.  Terminal statuses
    /// are rejected at build time.
    pub status: Status,
}

/// Fluent builder for [`Population`] + [`AgentRngs`].
///
/// Agents are appended in the order they will be processed each tick.  All
/// validation happens in [`build`](Self::build); an invalid scenario never
/// produces a partially usable population.
pub struct PopulationBuilder {
    arena: Arena,
    seed: u64,
    agents: Vec<AgentSeed>,
}

impl PopulationBuilder {
    /// Create a builder for agents wandering `arena`, using `seed` as the
    /// run's global RNG seed.
    pub fn new(arena: Arena, seed: u64) -> Self {
        Self {
            arena,
            seed,
            agents: Vec::new(),
        }
    }

    /// Append one agent.  Its index in the population is the number of
    /// agents added before it.
    pub fn agent(mut self, seed: AgentSeed) -> Self {
        self.agents.push(seed);
        self
    }

    /// Validate every agent and construct `(Population, AgentRngs)`.
    ///
    /// Checks, in order: the population is non-empty; every radius is
    /// positive, finite, and smaller than both arena dimensions; every speed
    /// is non-negative and finite; no agent starts in a terminal status.
    /// Sick seeds get `infected_at = Tick::ZERO` (setup time).
    pub fn build(self) -> PopulationResult<(Population, AgentRngs)> {
        if self.agents.is_empty() {
            return Err(PopulationError::Empty);
        }

        for (i, a) in self.agents.iter().enumerate() {
            let agent = AgentId(i as u32);
            if !a.radius.is_finite() || a.radius <= 0.0 {
                return Err(PopulationError::InvalidRadius { agent, radius: a.radius });
            }
            if a.radius >= self.arena.width || a.radius >= self.arena.height {
                return Err(PopulationError::RadiusExceedsArena {
                    agent,
                    radius: a.radius,
                    arena: self.arena,
                });
            }
            if !a.speed.is_finite() || a.speed < 0.0 {
                return Err(PopulationError::InvalidSpeed { agent, speed: a.speed });
            }
            if a.status.is_terminal() {
                return Err(PopulationError::TerminalSeedStatus { agent, status: a.status });
            }
        }

        let mut pop = Population::with_capacity(self.agents.len());
        for a in &self.agents {
            pop.x.push(a.x);
            pop.y.push(a.y);
            pop.heading_deg.push(a.heading_deg);
            pop.speed.push(a.speed);
            pop.radius.push(a.radius);
            pop.status.push(a.status);
            pop.infected_at
                .push((a.status == Status::Sick).then_some(Tick::ZERO));
        }

        let rngs = AgentRngs::new(pop.len(), self.seed);
        Ok((pop, rngs))
    }
}

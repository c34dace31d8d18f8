//! Fluent builder for constructing a [`Sim`].

use pandemic_agent::{AgentRngs, Population};
use pandemic_core::{Arena, SimConfig};
use pandemic_engine::{AggregateCounts, DiseaseConfig, DiseaseModel, EpidemicTracker};

use crate::{Sim, SimError, SimResult};

/// Builder validating a complete scenario into a ready-to-run [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, output interval, …
/// - [`Arena`] + [`DiseaseConfig`] — validated together into the
///   [`DiseaseModel`] during `build()`
/// - `Population` + `AgentRngs` — from
///   [`PopulationBuilder`][pandemic_agent::PopulationBuilder]
///
/// Every configuration failure surfaces from `build()` as a [`SimError`];
/// there is no partially constructed run.
pub struct SimBuilder {
    config: SimConfig,
    arena: Arena,
    disease: DiseaseConfig,
    population: Population,
    rngs: AgentRngs,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(
        config: SimConfig,
        arena: Arena,
        disease: DiseaseConfig,
        population: Population,
        rngs: AgentRngs,
    ) -> Self {
        Self {
            config,
            arena,
            disease,
            population,
            rngs,
        }
    }

    /// Validate inputs, seed the tracker from the initial statuses, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.rngs.len() != self.population.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.population.len(),
                got: self.rngs.len(),
            });
        }

        let model = DiseaseModel::new(self.arena, self.disease)?;
        let initial = AggregateCounts::tally(self.population.status.iter().copied());
        let tracker = EpidemicTracker::new(initial);

        log::info!(
            "sim ready: {} agents ({} seeded sick) in {} arena, seed {}",
            self.population.len(),
            initial.sick,
            self.arena,
            self.config.seed,
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            population: self.population,
            rngs: self.rngs,
            model,
            tracker,
        })
    }
}

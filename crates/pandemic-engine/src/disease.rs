//! The epidemic state machine: infection, healing, and death.

use pandemic_agent::Population;
use pandemic_core::{AgentId, AgentRng, Arena, Status, Tick};

use crate::{ConfigError, EpidemicTracker, Kinematics, collision};

// ── DiseaseConfig ─────────────────────────────────────────────────────────────

/// Disease parameters.
///
/// The probabilities gate the infection and death draws; the healing
/// duration is how many ticks an agent stays Sick before its outcome is
/// resolved.  Degenerate values are valid and select simpler dynamics:
/// `sick_probability = 1.0` makes every contact infect,
/// `death_probability = 0.0` disables death entirely.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseConfig {
    /// Chance a Healthy agent becomes Sick per qualifying contact, in [0, 1].
    pub sick_probability: f64,
    /// Chance a resolving Sick agent dies instead of curing, in [0, 1].
    pub death_probability: f64,
    /// Ticks an agent must remain Sick before resolution; must be ≥ 1.
    pub healing_duration_ticks: u64,
}

impl DiseaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.sick_probability) {
            return Err(ConfigError::ProbabilityOutOfRange {
                name: "sick_probability",
                value: self.sick_probability,
            });
        }
        if !(0.0..=1.0).contains(&self.death_probability) {
            return Err(ConfigError::ProbabilityOutOfRange {
                name: "death_probability",
                value: self.death_probability,
            });
        }
        if self.healing_duration_ticks == 0 {
            return Err(ConfigError::ZeroHealingDuration);
        }
        Ok(())
    }
}

// ── DiseaseModel ──────────────────────────────────────────────────────────────

/// The per-agent epidemic state machine.
///
/// One configurable model replaces a hierarchy of engine variants: movement
/// is always on, and the infection/healing/death rules are enabled or
/// neutralized purely by the [`DiseaseConfig`] values.
///
/// # Mutation contract
///
/// `advance` writes only the advancing agent's own state.  Contacts are read
/// through the collision scan but never mutated, so an agent's outcome this
/// tick does not depend on whether its contacts were processed before or
/// after it — only their positions carry that ordering (earlier agents have
/// already moved this tick, later ones have not).
pub struct DiseaseModel {
    kinematics: Kinematics,
    config: DiseaseConfig,
}

impl DiseaseModel {
    /// Validate `arena` and `config` and build the model.
    pub fn new(arena: Arena, config: DiseaseConfig) -> Result<Self, ConfigError> {
        if !arena.width.is_finite() || arena.width <= 0.0 {
            return Err(ConfigError::InvalidArenaDimension {
                axis: "width",
                value: arena.width,
            });
        }
        if !arena.height.is_finite() || arena.height <= 0.0 {
            return Err(ConfigError::InvalidArenaDimension {
                axis: "height",
                value: arena.height,
            });
        }
        config.validate()?;
        Ok(Self {
            kinematics: Kinematics::new(arena),
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> DiseaseConfig {
        self.config
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.kinematics.arena()
    }

    /// Advance one agent by one tick: move, then apply the status rules.
    ///
    /// Dead agents are a complete no-op — no movement, no scans, no draws.
    pub fn advance(
        &self,
        agent: AgentId,
        pop: &mut Population,
        now: Tick,
        rng: &mut AgentRng,
        tracker: &mut EpidemicTracker,
    ) {
        let i = agent.index();
        if pop.status[i] == Status::Dead {
            return;
        }

        self.kinematics.advance(pop, agent);

        match pop.status[i] {
            Status::Healthy => self.try_infect(agent, pop, now, rng, tracker),
            Status::Sick => self.try_resolve(agent, pop, now, rng, tracker),
            // Cured agents keep wandering; immunity is permanent, so there
            // is nothing left to decide for them.
            Status::Cured => {}
            Status::Dead => unreachable!("dead agents never reach the status rules"),
        }
    }

    /// Scan contacts in population order; the first Sick contact whose
    /// Bernoulli draw succeeds infects the agent.  At most one transition
    /// per tick — a successful draw stops the scan, a failed one moves on to
    /// the next Sick contact.
    fn try_infect(
        &self,
        agent: AgentId,
        pop: &mut Population,
        now: Tick,
        rng: &mut AgentRng,
        tracker: &mut EpidemicTracker,
    ) {
        for other in collision::overlapping(pop, agent) {
            if other == agent || pop.status[other.index()] != Status::Sick {
                continue;
            }
            if rng.gen_bool(self.config.sick_probability) {
                let i = agent.index();
                pop.status[i] = Status::Sick;
                pop.infected_at[i] = Some(now);
                tracker.on_transition(Status::Healthy, Status::Sick, now);
                break;
            }
        }
    }

    /// Resolve a Sick agent once the healing duration has elapsed: one death
    /// draw decides Dead vs. Cured.  Both outcomes are terminal, so this
    /// fires at most once per agent ever.
    fn try_resolve(
        &self,
        agent: AgentId,
        pop: &mut Population,
        now: Tick,
        rng: &mut AgentRng,
        tracker: &mut EpidemicTracker,
    ) {
        let i = agent.index();
        let Some(infected_at) = pop.infected_at[i] else {
            panic!("sick agent {agent} has no infection tick");
        };
        if now.since(infected_at) <= self.config.healing_duration_ticks {
            return;
        }

        let outcome = if rng.gen_bool(self.config.death_probability) {
            Status::Dead
        } else {
            Status::Cured
        };
        pop.status[i] = outcome;
        tracker.on_transition(Status::Sick, outcome, now);
    }
}

//! Population storage: `Population` (SoA agent state) and `AgentRngs`.
//!
//! # Why two structs?
//!
//! The tick loop needs `&mut AgentRngs` (the advancing agent's RNG) and
//! `&mut Population` (its state plus everyone else's positions) at the same
//! time.  Keeping the RNGs in their own struct lets the borrow checker see
//! the two borrows as disjoint fields of the sim.

use pandemic_core::{AgentId, AgentRng, Point2D, Status, Tick};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`Population`] to allow
/// simultaneous `&mut AgentRngs` + `&mut Population` borrows in the tick loop.
pub struct AgentRngs {
    inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `len()` elements; an `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let status = pop.status[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Insertion order is significant: it is the tick-processing order and the
/// order in which the collision detector reports overlaps.
pub struct Population {
    /// Center x coordinate, arena units.
    pub x: Vec<f64>,
    /// Center y coordinate, arena units.
    pub y: Vec<f64>,
    /// Heading angle in degrees; reflected in place at arena boundaries.
    pub heading_deg: Vec<f64>,
    /// Arena units per tick; constant for the agent's lifetime.
    pub speed: Vec<f64>,
    /// Circle radius, arena units.
    pub radius: Vec<f64>,
    /// Current infection status.
    pub status: Vec<Status>,
    /// Tick at which the agent became Sick.  Meaningful only while Sick;
    /// nothing reads it after resolution.
    pub infected_at: Vec<Option<Tick>>,
}

impl Population {
    /// Number of agents.  Fixed for the whole run.
    #[inline]
    pub fn len(&self) -> usize {
        self.status.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.len() as u32).map(AgentId)
    }

    /// Center position of one agent.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Point2D {
        Point2D::new(self.x[agent.index()], self.y[agent.index()])
    }

    /// Count agents currently in `status`.
    pub fn count_status(&self, status: Status) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    // ── Package-private constructor used by PopulationBuilder ─────────────

    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            x: Vec::with_capacity(count),
            y: Vec::with_capacity(count),
            heading_deg: Vec::with_capacity(count),
            speed: Vec::with_capacity(count),
            radius: Vec::with_capacity(count),
            status: Vec::with_capacity(count),
            infected_at: Vec::with_capacity(count),
        }
    }
}

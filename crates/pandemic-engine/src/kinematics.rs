//! Per-tick movement with boundary reflection.

use pandemic_agent::Population;
use pandemic_core::{AgentId, Arena};

/// Advances agent positions from heading and speed, reflecting headings at
/// the arena boundary.
///
/// Speed never decays; an agent's velocity magnitude is constant for its
/// lifetime and only the heading changes, at the walls.
pub struct Kinematics {
    arena: Arena,
}

impl Kinematics {
    pub fn new(arena: Arena) -> Self {
        Self { arena }
    }

    /// The arena this engine reflects against.
    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Move `agent` one tick along its heading.
    ///
    /// The candidate position is computed once, from the heading as it was
    /// at the start of the call.  If the candidate x falls outside the band
    /// `[radius, width − radius]`, the heading is reflected horizontally
    /// (θ ← 180° − θ); independently, a candidate y outside
    /// `[radius, height − radius]` reflects it vertically (θ ← −θ).  The
    /// candidate is committed either way, so an agent can sit past the band
    /// for one tick before the reflected heading takes effect.
    pub fn advance(&self, pop: &mut Population, agent: AgentId) {
        let i = agent.index();
        let r = pop.radius[i];
        let theta = pop.heading_deg[i].to_radians();

        let next_x = pop.x[i] + pop.speed[i] * theta.cos();
        if next_x < r || next_x > self.arena.width - r {
            pop.heading_deg[i] = 180.0 - pop.heading_deg[i];
        }

        let next_y = pop.y[i] + pop.speed[i] * theta.sin();
        if next_y < r || next_y > self.arena.height - r {
            pop.heading_deg[i] = -pop.heading_deg[i];
        }

        pop.x[i] = next_x;
        pop.y[i] = next_y;
    }
}

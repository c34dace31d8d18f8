//! Circle-overlap queries over the whole population.
//!
//! The query is a plain O(n) scan per agent, O(n²) per tick — cheap enough
//! for populations in the hundreds.  A spatial index could be slotted in
//! behind [`overlapping`] as long as the predicate and the result order stay
//! the same.

use pandemic_agent::Population;
use pandemic_core::AgentId;

/// `true` when the circles of `a` and `b` intersect or touch.
///
/// Tangency counts: the predicate is `distance ≤ rA + rB`, inclusive.
#[inline]
pub fn circles_touch(pop: &Population, a: AgentId, b: AgentId) -> bool {
    let dist = pop.position(a).distance(pop.position(b));
    dist <= pop.radius[a.index()] + pop.radius[b.index()]
}

/// All agents whose circle overlaps `agent`'s, in population order.
///
/// The raw scan includes `agent` itself (distance zero always passes);
/// callers wanting neighbours only must filter it out.  Returning results in
/// population order is load-bearing: the state machine takes the first
/// qualifying contact in this order, which keeps runs deterministic for a
/// fixed population.
pub fn overlapping(pop: &Population, agent: AgentId) -> Vec<AgentId> {
    pop.agent_ids()
        .filter(|&other| circles_touch(pop, agent, other))
        .collect()
}

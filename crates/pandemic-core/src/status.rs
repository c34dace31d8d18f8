//! Infection status and its legal transitions.
//!
//! The status graph is a straight line with one fork at the end:
//!
//!   Healthy ──→ Sick ──→ Cured
//!                  └───→ Dead
//!
//! Cured and Dead are terminal; no agent ever skips Sick on the way to
//! either, and no agent leaves them.

/// Infection state of a single agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Never infected; susceptible on contact with a Sick agent.
    #[default]
    Healthy,
    /// Infectious; resolves to Cured or Dead after the healing duration.
    Sick,
    /// Recovered, permanently immune, still wandering.
    Cured,
    /// Did not survive; frozen in place for the rest of the run.
    Dead,
}

impl Status {
    /// All statuses in counter/reporting order.
    pub const ALL: [Status; 4] = [Status::Healthy, Status::Sick, Status::Cured, Status::Dead];

    /// `true` once no further transition can ever occur.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Cured | Status::Dead)
    }

    /// `true` if `self → to` is one of the legal transition edges.
    pub fn may_transition_to(self, to: Status) -> bool {
        matches!(
            (self, to),
            (Status::Healthy, Status::Sick)
                | (Status::Sick, Status::Cured)
                | (Status::Sick, Status::Dead)
        )
    }

    /// Lowercase label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Healthy => "healthy",
            Status::Sick => "sick",
            Status::Cured => "cured",
            Status::Dead => "dead",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

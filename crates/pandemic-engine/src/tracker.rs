//! Live per-status counts and the transition history they feed.

use pandemic_core::{Status, Tick};

// ── AggregateCounts ───────────────────────────────────────────────────────────

/// Population-health counters at a single observation point.
///
/// Invariant: `total()` equals the population size at every observation
/// point; the tracker checks this around every transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateCounts {
    pub healthy: usize,
    pub sick: usize,
    pub cured: usize,
    pub dead: usize,
}

impl AggregateCounts {
    /// Tally counts from an iterator of statuses (the initial population).
    pub fn tally<I: IntoIterator<Item = Status>>(statuses: I) -> Self {
        let mut counts = AggregateCounts {
            healthy: 0,
            sick: 0,
            cured: 0,
            dead: 0,
        };
        for status in statuses {
            *counts.get_mut(status) += 1;
        }
        counts
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.healthy + self.sick + self.cured + self.dead
    }

    /// Counter value for one status.
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Healthy => self.healthy,
            Status::Sick => self.sick,
            Status::Cured => self.cured,
            Status::Dead => self.dead,
        }
    }

    fn get_mut(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Healthy => &mut self.healthy,
            Status::Sick => &mut self.sick,
            Status::Cured => &mut self.cured,
            Status::Dead => &mut self.dead,
        }
    }
}

// ── HistoryRecord ─────────────────────────────────────────────────────────────

/// One point on a status curve: the counter value right after a transition
/// incremented it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    pub tick: Tick,
    pub counter: usize,
}

// ── EpidemicTracker ───────────────────────────────────────────────────────────

/// Tracks live counts per status and an append-only record stream per status.
///
/// A transition appends a record to the incremented side's stream only; the
/// decremented side changes count without leaving a record.  External
/// charting reads the streams; the core never does.
pub struct EpidemicTracker {
    population_size: usize,
    counts: AggregateCounts,
    healthy_records: Vec<HistoryRecord>,
    sick_records: Vec<HistoryRecord>,
    cured_records: Vec<HistoryRecord>,
    dead_records: Vec<HistoryRecord>,
}

impl EpidemicTracker {
    /// Seed the tracker from the initial population counts.
    pub fn new(initial: AggregateCounts) -> Self {
        Self {
            population_size: initial.total(),
            counts: initial,
            healthy_records: Vec::new(),
            sick_records: Vec::new(),
            cured_records: Vec::new(),
            dead_records: Vec::new(),
        }
    }

    #[inline]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Record one status transition.
    ///
    /// Decrements `counts[from]`, increments `counts[to]`, and appends
    /// `(now, counts[to])` to `to`'s record stream.  An illegal edge or a
    /// decrement below zero is a programming defect and panics; this is not
    /// a user-facing error path.
    pub fn on_transition(&mut self, from: Status, to: Status, now: Tick) {
        assert!(
            from.may_transition_to(to),
            "illegal status transition {from} -> {to}"
        );
        {
            let from_count = self.counts.get_mut(from);
            assert!(*from_count > 0, "no {from} agents left to transition");
            *from_count -= 1;
        }
        let to_count = {
            let c = self.counts.get_mut(to);
            *c += 1;
            *c
        };
        self.records_mut(to).push(HistoryRecord {
            tick: now,
            counter: to_count,
        });
        debug_assert_eq!(self.counts.total(), self.population_size);
    }

    /// Current counts.
    #[inline]
    pub fn snapshot(&self) -> AggregateCounts {
        self.counts
    }

    /// Append-only record stream for one status, oldest first.
    pub fn history(&self, status: Status) -> &[HistoryRecord] {
        match status {
            Status::Healthy => &self.healthy_records,
            Status::Sick => &self.sick_records,
            Status::Cured => &self.cured_records,
            Status::Dead => &self.dead_records,
        }
    }

    fn records_mut(&mut self, status: Status) -> &mut Vec<HistoryRecord> {
        match status {
            Status::Healthy => &mut self.healthy_records,
            Status::Sick => &mut self.sick_records,
            Status::Cured => &mut self.cured_records,
            Status::Dead => &mut self.dead_records,
        }
    }
}

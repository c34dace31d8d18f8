//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pandemic_agent::Population;
use pandemic_core::{SimConfig, Status, Tick};
use pandemic_engine::{AggregateCounts, EpidemicTracker};
use pandemic_sim::SimObserver;

use crate::OutputError;
use crate::row::{AgentSnapshotRow, StatusHistoryRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes agent snapshots, tick summaries, and the
/// final status history to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
///
/// Note that `run_ticks` never fires `on_sim_end`, so a partial run leaves
/// the history file empty and the writers unflushed; drive the sim with
/// `run` when using this observer.
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    start_unix_secs: i64,
    tick_duration_secs: u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            start_unix_secs: config.start_unix_secs,
            tick_duration_secs: config.tick_duration_secs,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn unix_time(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, counts: AggregateCounts) {
        let row = TickSummaryRow {
            tick: tick.0,
            unix_time_secs: self.unix_time(tick),
            healthy: counts.healthy as u64,
            sick: counts.sick as u64,
            cured: counts.cured as u64,
            dead: counts.dead as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population, _tracker: &EpidemicTracker) {
        let rows: Vec<AgentSnapshotRow> = population
            .agent_ids()
            .map(|agent| AgentSnapshotRow {
                agent_id: agent.0,
                tick: tick.0,
                x: population.x[agent.index()],
                y: population.y[agent.index()],
                status: population.status[agent.index()].as_str(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _population: &Population, tracker: &EpidemicTracker) {
        // The history is append-only and only grows on transitions, so one
        // dump at the end captures every record in order.
        let rows: Vec<StatusHistoryRow> = Status::ALL
            .into_iter()
            .flat_map(|status| {
                tracker
                    .history(status)
                    .iter()
                    .map(move |record| (status, *record))
            })
            .map(|(status, record)| StatusHistoryRow {
                status: status.as_str(),
                tick: record.tick.0,
                unix_time_secs: self.unix_time(record.tick),
                count: record.counter as u64,
            })
            .collect();

        let result = self.writer.write_history(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

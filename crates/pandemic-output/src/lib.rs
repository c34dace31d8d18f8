//! `pandemic-output` — simulation output writers.
//!
//! One CSV backend creating three files:
//!
//! | File                  | Contents                                          |
//! |-----------------------|---------------------------------------------------|
//! | `agent_snapshots.csv` | per-agent position + status at snapshot intervals |
//! | `tick_summaries.csv`  | per-tick aggregate counts                         |
//! | `status_history.csv`  | per-status transition records (the charting feed) |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `pandemic_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pandemic_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, StatusHistoryRow, TickSummaryRow};
pub use writer::OutputWriter;

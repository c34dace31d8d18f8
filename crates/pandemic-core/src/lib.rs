//! `pandemic-core` — foundational types for the pandemic simulation.
//!
//! This crate is a dependency of every other `pandemic-*` crate.  It
//! intentionally has no `pandemic-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                  |
//! |--------------|-------------------------------------------|
//! | [`ids`]      | `AgentId`                                 |
//! | [`geom`]     | `Point2D`, `Arena`, Euclidean distance    |
//! | [`time`]     | `Tick`, `SimClock`, `SimConfig`           |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (global) |
//! | [`status`]   | `Status` enum and its legal transitions   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geom;
pub mod ids;
pub mod rng;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geom::{Arena, Point2D};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use status::Status;
pub use time::{SimClock, SimConfig, Tick};

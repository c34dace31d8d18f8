//! Configuration validation errors.

use thiserror::Error;

/// Rejected disease or arena parameters.
///
/// All variants are fatal at scenario setup.  Once a run is ticking there
/// are no recoverable error conditions; mid-run invariant violations panic
/// instead (see [`EpidemicTracker`][crate::EpidemicTracker]).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} {value} is outside [0, 1]")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("healing duration must be at least one tick")]
    ZeroHealingDuration,

    #[error("arena {axis} {value} must be positive and finite")]
    InvalidArenaDimension { axis: &'static str, value: f64 },
}

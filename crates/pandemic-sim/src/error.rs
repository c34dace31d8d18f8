use pandemic_engine::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid scenario configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("RNG count {got} does not match population size {expected}")]
    AgentCountMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;

use lift_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("a run must last at least one round")]
    ZeroRounds,

    #[error("dispatch model returned {got} directions for {expected} elevators")]
    DirectionCountMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("walking speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("arrival epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

pub type MobilityResult<T> = Result<T, MobilityError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("satisfaction vector has {got} values but the need catalog has {expected}")]
    SatisfactionLength { expected: usize, got: usize },

    #[error("start position must be finite, got ({x}, {y})")]
    NonFinitePosition { x: f64, y: f64 },

    #[error("population is full")]
    PopulationFull,
}

pub type AgentResult<T> = Result<T, AgentError>;

use soc_agent::AgentError;
use soc_behavior::BehaviorError;
use soc_core::SocError;
use soc_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] SocError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;

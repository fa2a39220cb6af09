//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `SocError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

use crate::{ActionId, AgentId, NeedId};

/// The top-level error type for `soc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SocError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("need {0} not found")]
    NeedNotFound(NeedId),

    #[error("action {0} not found")]
    ActionNotFound(ActionId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `soc-*` crates.
pub type SocResult<T> = Result<T, SocError>;

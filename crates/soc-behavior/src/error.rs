use soc_core::{ActionId, NeedId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("duplicate {kind} name {name:?}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{action} refers to {need}, which is not in the need catalog")]
    UnknownNeed { action: ActionId, need: NeedId },

    #[error("catalog is full: at most {0} entries")]
    CatalogFull(usize),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

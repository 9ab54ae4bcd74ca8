use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("unknown checklist item: {0}")]
    UnknownItem(String),
    #[error("no evidence items of kind {0}")]
    NothingToScan(&'static str),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

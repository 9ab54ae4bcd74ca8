use thiserror::Error;

use crate::module::ModuleId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("module {0} not found")]
    ModuleNotFound(ModuleId),
    #[error("module id {0} appears more than once in the catalog")]
    DuplicateModuleId(ModuleId),
    #[error("module ids are 1-based; 0 is not a valid id")]
    ZeroModuleId,
}

pub type Result<T> = std::result::Result<T, ModelError>;

//! CLI library components for the Quebrada Conectada journey driver.

pub mod export;
pub mod journey;
pub mod logging;
pub mod script;
pub mod summary;

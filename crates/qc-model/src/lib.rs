//! Module catalog for the Quebrada Conectada learning journey.
//!
//! A journey is a fixed, ordered set of educational modules. Each module is
//! identified by a 1-based [`ModuleId`] and carries display text plus a
//! [`Theme`]. The [`ModuleRegistry`] is built once at startup and never
//! mutated afterwards.

pub mod error;
pub mod module;
pub mod registry;

pub use error::{ModelError, Result};
pub use module::{Module, ModuleId, Theme};
pub use registry::ModuleRegistry;

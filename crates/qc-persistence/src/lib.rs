//! Accessibility preference persistence.
//!
//! A single small blob (`theme`, `fontSize`, `showLibras`) is loaded once at
//! startup and written back on every change. Loading never fails: missing,
//! unreadable or malformed data falls back to [`Preferences::default`].
//!
//! # Example
//!
//! ```no_run
//! use qc_persistence::{FilePreferenceStore, PreferencesController};
//!
//! let store = FilePreferenceStore::at_default_location();
//! let mut prefs = PreferencesController::load(store);
//! prefs.toggle_theme()?;
//! # Ok::<(), qc_persistence::PersistenceError>(())
//! ```

pub mod controller;
pub mod error;
pub mod io;
pub mod preferences;
pub mod store;

pub use controller::PreferencesController;
pub use error::{PersistenceError, Result};
pub use io::write_atomic;
pub use preferences::{ColorScheme, FontSize, Preferences};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

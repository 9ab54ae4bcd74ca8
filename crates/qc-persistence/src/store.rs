//! Preference stores.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{PersistenceError, Result};
use crate::io::write_atomic;
use crate::preferences::Preferences;

/// Config file name inside the platform config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Backing storage for the preference blob.
pub trait PreferenceStore {
    /// Raw stored text, or `None` when nothing was saved yet.
    fn read_raw(&self) -> Result<Option<String>>;

    fn write_raw(&mut self, contents: &str) -> Result<()>;

    /// Load and parse, surfacing every failure.
    fn try_load(&self) -> Result<Option<Preferences>> {
        match self.read_raw()? {
            Some(raw) => decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Load, falling back to defaults on any failure.
    fn load(&self) -> Preferences {
        match self.try_load() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default preferences");
                Preferences::default()
            }
        }
    }

    fn save(&mut self, prefs: &Preferences) -> Result<()> {
        let raw = encode(prefs)?;
        self.write_raw(&raw)
    }
}

fn encode(prefs: &Preferences) -> Result<String> {
    toml::to_string_pretty(prefs).map_err(|source| PersistenceError::Serialization { source })
}

fn decode(raw: &str) -> Result<Preferences> {
    toml::from_str(raw).map_err(|e| PersistenceError::PersistedPreferenceCorrupt {
        reason: e.message().to_string(),
    })
}

// =============================================================================
// FILE STORE
// =============================================================================

/// TOML file on disk.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`FilePreferenceStore::config_path`].
    pub fn at_default_location() -> Self {
        Self::new(Self::config_path())
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("br", "QuebradaConectada", "QC")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Io {
                operation: "read",
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn write_raw(&mut self, contents: &str) -> Result<()> {
        write_atomic(&self.path, contents.as_bytes())?;
        tracing::info!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    raw: Option<String>,
    writes: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with raw stored text.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of saves performed.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read_raw(&self) -> Result<Option<String>> {
        Ok(self.raw.clone())
    }

    fn write_raw(&mut self, contents: &str) -> Result<()> {
        self.raw = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{ColorScheme, FontSize};

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryPreferenceStore::new();
        assert!(store.try_load().unwrap().is_none());
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn test_corrupt_blob_falls_back() {
        let store = MemoryPreferenceStore::with_raw("theme = [not toml");
        assert!(matches!(
            store.try_load(),
            Err(PersistenceError::PersistedPreferenceCorrupt { .. })
        ));
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn test_unknown_variant_is_corrupt() {
        let store = MemoryPreferenceStore::with_raw("theme = \"sepia\"");
        assert!(store.try_load().is_err());
        assert_eq!(store.load().theme, ColorScheme::Dark);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryPreferenceStore::new();
        let prefs = Preferences {
            theme: ColorScheme::Light,
            font_size: FontSize::Sm,
            show_libras: true,
        };
        store.save(&prefs).unwrap();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn test_config_path_file_name() {
        let path = FilePreferenceStore::config_path();
        assert_eq!(path.file_name().unwrap(), PREFERENCES_FILE);
    }
}

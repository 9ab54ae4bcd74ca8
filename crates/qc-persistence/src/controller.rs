//! Write-on-change preference controller.

use crate::error::Result;
use crate::preferences::{ColorScheme, FontSize, Preferences};
use crate::store::PreferenceStore;

/// Owns the current preferences and persists every change.
///
/// A change is applied in memory before it is saved; when the save fails the
/// new value stays in effect for this run and the error is returned.
#[derive(Debug)]
pub struct PreferencesController<S> {
    store: S,
    current: Preferences,
}

impl<S: PreferenceStore> PreferencesController<S> {
    /// Load once from `store`, using defaults if the stored blob is unusable.
    pub fn load(store: S) -> Self {
        let current = store.load();
        tracing::debug!(?current, "preferences loaded");
        Self { store, current }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Switch between light and dark; returns the new scheme.
    pub fn toggle_theme(&mut self) -> Result<ColorScheme> {
        self.current.theme = self.current.theme.toggled();
        self.persist()?;
        Ok(self.current.theme)
    }

    /// Returns `false` without writing when the size is unchanged.
    pub fn set_font_size(&mut self, size: FontSize) -> Result<bool> {
        if self.current.font_size == size {
            return Ok(false);
        }
        self.current.font_size = size;
        self.persist()?;
        Ok(true)
    }

    /// Show or hide the Libras widget; returns the new state.
    pub fn toggle_libras(&mut self) -> Result<bool> {
        self.current.show_libras = !self.current.show_libras;
        self.persist()?;
        Ok(self.current.show_libras)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.current)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a journey module (1-based, unique within a registry).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ModuleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pedagogical theme a module belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Vigilance,
    Literacy,
    Ludicity,
}

impl Theme {
    /// Get display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vigilance => "Vigilance",
            Self::Literacy => "Literacy",
            Self::Ludicity => "Ludicity",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One self-contained educational simulation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub theme: Theme,
}

impl Module {
    pub fn new(
        id: impl Into<ModuleId>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            theme,
        }
    }
}

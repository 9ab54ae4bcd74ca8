//! Self-protection guide checklist.

use qc_session::{Payload, TelemetrySink};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl GuideItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideChecklist {
    items: Vec<GuideItem>,
}

impl GuideChecklist {
    pub fn new(items: Vec<GuideItem>) -> Self {
        Self { items }
    }

    /// Flip an item and return its new state.
    pub fn toggle(&mut self, id: &str, sink: &mut impl TelemetrySink) -> Result<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| SimulationError::UnknownItem(id.to_string()))?;
        item.checked = !item.checked;

        let mut payload = Payload::new();
        payload.insert("item".to_string(), item.id.clone().into());
        payload.insert("checked".to_string(), item.checked.into());
        sink.log_event("guide_item_toggled", Some(payload));
        Ok(item.checked)
    }

    pub fn items(&self) -> &[GuideItem] {
        &self.items
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Rounded share of checked items; 0 for an empty list.
    pub fn percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.checked_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u8
    }
}

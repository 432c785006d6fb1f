use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;

/// Descriptive record for one selectable body: a name, a one-line blurb and
/// a fixed set of fact strings shown by the info overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyInfo {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub facts: Vec<String>,
}

/// One selectable entry. The body handle is a stable id into the scene, not
/// a reference — the scene owns the bodies and outlives the selector.
#[derive(Debug, Clone)]
pub struct SelectionEntry {
    pub body: BodyId,
    pub info: BodyInfo,
}

/// Cyclic selection over a fixed list of bodies, plus the selection-mode
/// flag. The list is authored at startup and never shrinks; every query
/// still answers `None` rather than indexing blindly.
pub struct Selector {
    entries: Vec<SelectionEntry>,
    selected: usize,
    active: bool,
}

impl Selector {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: 0,
            active: false,
        }
    }

    pub fn add(&mut self, body: BodyId, info: BodyInfo) {
        self.entries.push(SelectionEntry { body, info });
    }

    /// Move to the next entry, wrapping around. Silent no-op when empty.
    pub fn advance(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.entries.len();
        log::info!("selected: {}", self.entries[self.selected].info.name);
    }

    /// Enter selection mode. Does not advance the selection.
    pub fn enter(&mut self) {
        self.active = true;
        if let Some(info) = self.selected_info() {
            log::info!("entered selection mode, selected: {}", info.name);
        }
    }

    /// Leave selection mode.
    pub fn exit(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.entries.len()).then_some(self.selected)
    }

    pub fn selected_body(&self) -> Option<BodyId> {
        self.entries.get(self.selected).map(|e| e.body)
    }

    pub fn selected_info(&self) -> Option<&BodyInfo> {
        self.entries.get(self.selected).map(|e| &e.info)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

//! Headless view plumbing: search text, add-dialog state, and the draft name.
//!
//! This is the glue a UI layer would bind widgets to. It holds no inventory
//! data of its own; the displayed list is always derived from the sync
//! component's snapshot filtered by the current search text.

use crate::inventory::{InventoryError, InventorySync};
use crate::model::Item;
use tracing::debug;

/// View-model for the inventory page.
///
/// One instance per user session. Callers are expected to await each
/// mutation before issuing the next, which is what serializes mutations
/// within a session; nothing here queues or locks.
pub struct InventoryView {
    sync: InventorySync,
    search_input: String,
    add_dialog_open: bool,
    draft_name: String,
}

impl InventoryView {
    pub fn new(sync: InventorySync) -> Self {
        Self {
            sync,
            search_input: String::new(),
            add_dialog_open: false,
            draft_name: String::new(),
        }
    }

    /// Loads the initial snapshot; call once before first render.
    pub async fn refresh(&mut self) -> Result<(), InventoryError> {
        self.sync.load().await
    }

    /// The rows to display: the snapshot filtered by the search text.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.sync.search(&self.search_input)
    }

    pub fn set_search_input(&mut self, text: &str) {
        self.search_input = text.to_string();
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    // --- Add dialog plumbing ---

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
        self.draft_name.clear();
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn set_draft_name(&mut self, text: &str) {
        self.draft_name = text.to_string();
    }

    /// Submits the draft name from the add dialog.
    ///
    /// On success the draft is cleared and the dialog closed. On failure the
    /// dialog stays open with the draft intact so the user can fix the name
    /// or retry, and the error is returned for display.
    pub async fn submit_add(&mut self) -> Result<(), InventoryError> {
        let draft = self.draft_name.clone();
        debug!(name = %draft, "Submitting add dialog");
        self.sync.add(&draft).await?;
        self.close_add_dialog();
        Ok(())
    }

    /// Handles the per-row remove button; `name` comes from the snapshot and
    /// is already canonical.
    pub async fn remove_item(&mut self, name: &str) -> Result<(), InventoryError> {
        self.sync.remove(name).await
    }
}

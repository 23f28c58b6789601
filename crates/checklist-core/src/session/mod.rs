//! Session Controller
//!
//! Owns the active template and the displayed snapshot, and mirrors every
//! mutation into the [`ChecklistStore`].


use crate::domain::{ChecklistItem, Progress, TemplateKey};
use crate::repository::{ChecklistStore, KeyValueStorage};

/// Process-wide session state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Unset until the first template is opened
    pub active_template: Option<TemplateKey>,
}

/// Checklist session for one page lifetime
#[derive(Debug, Clone)]
pub struct ChecklistSession<S> {
    store: ChecklistStore<S>,
    state: SessionState,
    items: Vec<ChecklistItem>,
}

impl<S: KeyValueStorage> ChecklistSession<S> {
    pub fn new(store: ChecklistStore<S>) -> Self {
        Self::with_state(store, SessionState::default())
    }

    pub fn with_state(store: ChecklistStore<S>, state: SessionState) -> Self {
        Self {
            store,
            state,
            items: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn active_template(&self) -> Option<TemplateKey> {
        self.state.active_template
    }

    /// Displayed snapshot
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn store(&self) -> &ChecklistStore<S> {
        &self.store
    }

    /// Open a template by its selector value. Empty or unknown keys are ignored.
    pub fn open_template(&mut self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        match TemplateKey::parse(key) {
            Some(template) => {
                self.open(template);
                true
            }
            None => {
                log::debug!("[SESSION] Unknown template key {:?}", key);
                false
            }
        }
    }

    /// Switch to `template`, showing its saved snapshot or, if none is
    /// readable, its defaults (which are persisted immediately). A saved
    /// snapshot that decoding had to clean up is written back as displayed.
    pub fn open(&mut self, template: TemplateKey) {
        self.state.active_template = Some(template);

        if let Some(saved) = self.store.load_snapshot(template) {
            log::info!("[SESSION] Opened {} with {} saved items", template, saved.items.len());
            self.items = saved.items;
            if saved.normalized {
                log::debug!("[SESSION] Rewriting normalized record for {}", template);
                self.persist();
            }
            return;
        }

        self.items = template.default_items();
        log::info!("[SESSION] Initialized {} from defaults", template);
        self.persist();
    }

    /// Append an unchecked item. Returns false when nothing changed.
    pub fn add_single(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.state.active_template.is_none() {
            return false;
        }
        if self.items.iter().any(|item| item.text == text) {
            log::debug!("[SESSION] Rejected duplicate item {:?}", text);
            return false;
        }

        self.items.push(ChecklistItem::new(text));
        self.persist();
        true
    }

    /// Flip the item at display position `index`. Returns the new state,
    /// or `None` when there is no such item.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        self.state.active_template?;
        let checked = self.items.get_mut(index)?.toggle();
        self.persist();
        Some(checked)
    }

    /// Empty the active checklist and delete its record once `confirm`
    /// agrees. `confirm` is only asked when a template is active.
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        let Some(template) = self.state.active_template else {
            return false;
        };
        if !confirm() {
            return false;
        }

        self.items.clear();
        if let Err(e) = self.store.remove(template) {
            log::warn!("[SESSION] Failed to remove record for {}: {}", template, e);
        }
        log::info!("[SESSION] Cleared {}", template);
        true
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }

    /// Best-effort write of the displayed snapshot
    fn persist(&self) {
        let Some(template) = self.state.active_template else {
            return;
        };
        if let Err(e) = self.store.save(template, &self.items) {
            log::warn!("[SESSION] Failed to save {}: {}", template, e);
        }
    }
}

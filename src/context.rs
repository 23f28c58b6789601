//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use checklist_core::{ChecklistItem, ChecklistSession, Progress, TemplateKey};

use crate::storage::BrowserStorage;

pub type Session = ChecklistSession<BrowserStorage>;

const CLEAR_CONFIRM_MESSAGE: &str = "全ての項目を削除します。よろしいですか？";

/// App-wide handle to the checklist session
#[derive(Clone, Copy)]
pub struct ChecklistContext {
    session: RwSignal<Session>,
}

impl ChecklistContext {
    pub fn new(session: Session) -> Self {
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Displayed items (reactive)
    pub fn items(&self) -> Vec<ChecklistItem> {
        self.session.with(|s| s.items().to_vec())
    }

    pub fn progress(&self) -> Progress {
        self.session.with(|s| s.progress())
    }

    pub fn active_template(&self) -> Option<TemplateKey> {
        self.session.with(|s| s.active_template())
    }

    pub fn open_template(&self, key: &str) {
        self.session.update(|s| {
            s.open_template(key);
        });
    }

    pub fn add_single(&self, text: &str) {
        self.session.update(|s| {
            s.add_single(text);
        });
    }

    pub fn toggle(&self, index: usize) {
        self.session.update(|s| {
            s.toggle(index);
        });
    }

    /// Clear the active checklist after a blocking `window.confirm`
    pub fn clear_all(&self) {
        self.session.update(|s| {
            s.clear_all(confirm_clear);
        });
    }
}

fn confirm_clear() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(CLEAR_CONFIRM_MESSAGE).ok())
        .unwrap_or(false)
}

pub fn use_checklist() -> ChecklistContext {
    use_context::<ChecklistContext>().expect("ChecklistContext should be provided")
}

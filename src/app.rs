//! Checklist App
//!
//! Root component: template selector, add form, item list and progress.

use leptos::prelude::*;

use checklist_core::{ChecklistConfig, ChecklistSession, ChecklistStore};

use crate::components::{ChecklistView, ClearButton, NewItemForm, ProgressPanel, TemplateSelector};
use crate::context::ChecklistContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: ChecklistConfig) -> impl IntoView {
    let store = ChecklistStore::with_prefix(BrowserStorage, config.storage_prefix.clone());
    let ctx = ChecklistContext::new(ChecklistSession::new(store));
    provide_context(ctx);

    // Open whatever the selector starts on
    let initial = config.initial_template;
    ctx.open_template(initial.as_str());
    log::info!("[APP] Started with template {}", initial);

    view! {
        <main class="checklist-app">
            <h1>"チェックリスト"</h1>

            <TemplateSelector initial=initial />

            <NewItemForm />

            <ProgressPanel />

            <ChecklistView />

            <ClearButton />
        </main>
    }
}

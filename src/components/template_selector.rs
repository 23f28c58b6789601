//! Template Selector Component
//!
//! Dropdown of the template catalog plus an apply button.

use leptos::prelude::*;

use checklist_core::{TemplateKey, ALL_TEMPLATES};

use crate::context::use_checklist;

/// Template dropdown. Choosing only changes the selection; "apply" switches.
#[component]
pub fn TemplateSelector(initial: TemplateKey) -> impl IntoView {
    let ctx = use_checklist();
    let (selected, set_selected) = signal(initial.as_str().to_string());

    let apply = move |_| {
        let key = selected.get();
        if key.is_empty() { return; }
        ctx.open_template(&key);
    };

    view! {
        <div class="template-row">
            <select
                class="template-select"
                prop:value=move || selected.get()
                on:change=move |ev| set_selected.set(event_target_value(&ev))
            >
                {ALL_TEMPLATES.iter().map(|key| {
                    let key = *key;
                    view! {
                        <option
                            value=key.as_str()
                            selected=move || selected.get() == key.as_str()
                        >
                            {key.display_name()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button class="apply-btn" on:click=apply>"テンプレ投入"</button>
        </div>
    }
}

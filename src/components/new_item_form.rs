//! New Item Form Component
//!
//! Text input for adding a single item to the active checklist.

use leptos::prelude::*;

use crate::context::use_checklist;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_checklist();
    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_single(&new_text.get());
        // Cleared even when the add was rejected
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="項目を追加..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"追加"</button>
            </div>
        </form>
    }
}

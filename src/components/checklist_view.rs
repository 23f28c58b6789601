//! Checklist View Component
//!
//! Renders the session's displayed snapshot.

use leptos::prelude::*;

use crate::components::ChecklistRow;
use crate::context::use_checklist;

#[component]
pub fn ChecklistView() -> impl IntoView {
    let ctx = use_checklist();

    view! {
        <ul class="task-list">
            <For
                each=move || ctx.items().into_iter().enumerate()
                // Labels may repeat in tampered records, so key on position too
                key=|(index, item)| (*index, item.text.clone(), item.checked)
                children=move |(index, item)| view! { <ChecklistRow index=index item=item /> }
            />
        </ul>
    }
}

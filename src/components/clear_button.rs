//! Clear Button Component

use leptos::prelude::*;

use crate::context::use_checklist;

/// Deletes every item of the active template after a confirm dialog
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_checklist();

    view! {
        <button
            class="clear-btn"
            disabled=move || ctx.active_template().is_none()
            on:click=move |_| ctx.clear_all()
        >
            "全削除"
        </button>
    }
}

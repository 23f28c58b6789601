//! Progress Panel Component

use leptos::prelude::*;

use crate::context::use_checklist;

#[component]
pub fn ProgressPanel() -> impl IntoView {
    let ctx = use_checklist();
    let progress = Memo::new(move |_| ctx.progress());

    view! {
        <div class="progress-panel">
            <progress
                class="progress-bar"
                max="100"
                value=move || progress.get().percent.to_string()
            />
            <p class="progress-text">{move || progress.get().label()}</p>
        </div>
    }
}

//! Checklist Row Component
//!
//! One checkbox and label.

use leptos::prelude::*;

use checklist_core::ChecklistItem;

use crate::context::use_checklist;

/// Struck-through, muted label when checked
fn label_style(checked: bool) -> &'static str {
    if checked {
        "text-decoration: line-through; color: #888;"
    } else {
        "text-decoration: none; color: #000;"
    }
}

#[component]
pub fn ChecklistRow(index: usize, item: ChecklistItem) -> impl IntoView {
    let ctx = use_checklist();
    let checked = item.checked;

    view! {
        <li class={if checked { "item-row completed" } else { "item-row" }}>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| ctx.toggle(index)
            />
            <span class="item-text" style=label_style(checked)>{item.text}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_style() {
        assert!(label_style(true).contains("line-through"));
        assert!(label_style(true).contains("#888"));
        assert!(label_style(false).contains("none"));
    }
}

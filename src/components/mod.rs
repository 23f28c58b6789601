//! UI Components
//!
//! Leptos components projecting the checklist session.

mod template_selector;
mod new_item_form;
mod checklist_row;
mod checklist_view;
mod progress_panel;
mod clear_button;

pub use template_selector::TemplateSelector;
pub use new_item_form::NewItemForm;
pub use checklist_row::ChecklistRow;
pub use checklist_view::ChecklistView;
pub use progress_panel::ProgressPanel;
pub use clear_button::ClearButton;

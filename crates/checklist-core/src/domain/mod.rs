//! Domain Layer
//!
//! Checklist entities, the fixed template catalog and derived progress.
//! This layer has NO storage dependencies (except serde for serialization).

mod item;
mod template;
mod progress;

pub use item::ChecklistItem;
pub use template::{TemplateKey, ALL_TEMPLATES};
pub use progress::Progress;

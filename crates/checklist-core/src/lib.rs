//! Checklist Core
//!
//! Layered architecture:
//! - domain: Items, the template catalog and progress
//! - repository: Key-value storage abstraction and the checklist store
//! - session: The controller the UI drives
//! - config: Startup configuration

pub mod config;
pub mod domain;
pub mod repository;
pub mod session;

pub use config::ChecklistConfig;
pub use domain::{ChecklistItem, Progress, TemplateKey, ALL_TEMPLATES};
pub use repository::{
    ChecklistStore, KeyValueStorage, MemoryStorage, StorageError, StorageResult, StoredSnapshot,
};
pub use session::{ChecklistSession, SessionState};

//! Repository Layer
//!
//! Key-value storage abstraction and the per-template checklist store.

mod traits;
mod error;
mod memory;
mod checklist_store;

pub use traits::KeyValueStorage;
pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use checklist_store::{decode_snapshot, ChecklistStore, StoredSnapshot};

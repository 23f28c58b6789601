//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for durable string slots.
//! Implementations can use browser localStorage, in-memory maps, etc.

use super::error::StorageResult;

/// A string-keyed, string-valued durable store
///
/// Mirrors the shape of the Web Storage API. Each call is a complete,
/// synchronous operation on one slot.
pub trait KeyValueStorage {
    /// Read a slot. `Ok(None)` when the slot does not exist.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite a slot
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a slot. Removing a missing slot is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}


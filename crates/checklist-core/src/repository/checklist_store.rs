//! Checklist Store
//!
//! Serializes per-template snapshots into namespaced key-value slots.

use serde_json::Value;

use crate::config::DEFAULT_STORAGE_PREFIX;
use crate::domain::{ChecklistItem, TemplateKey};
use super::error::StorageResult;
use super::traits::KeyValueStorage;

/// Per-template snapshot persistence on top of a [`KeyValueStorage`]
#[derive(Debug, Clone)]
pub struct ChecklistStore<S> {
    storage: S,
    prefix: String,
}

impl<S: KeyValueStorage> ChecklistStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_prefix(storage, DEFAULT_STORAGE_PREFIX)
    }

    pub fn with_prefix(storage: S, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
        }
    }

    /// Slot name for a template, e.g. `checklist_items_v1__out`
    pub fn slot_key(&self, key: TemplateKey) -> String {
        format!("{}__{}", self.prefix, key.as_str())
    }

    /// Overwrite the template's slot with `items`
    pub fn save(&self, key: TemplateKey, items: &[ChecklistItem]) -> StorageResult<()> {
        let json = serde_json::to_string(items)?;
        self.storage.set_item(&self.slot_key(key), &json)
    }

    /// Read the template's snapshot.
    ///
    /// Returns `None` when the slot is missing, unreadable, not JSON, or not an
    /// array. All of these mean "never saved" to the caller.
    pub fn load(&self, key: TemplateKey) -> Option<Vec<ChecklistItem>> {
        self.load_snapshot(key).map(|snapshot| snapshot.items)
    }

    /// Like [`load`](Self::load), also reporting whether decoding changed the
    /// stored entries.
    pub fn load_snapshot(&self, key: TemplateKey) -> Option<StoredSnapshot> {
        let slot = self.slot_key(key);
        let raw = match self.storage.get_item(&slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("[STORE] Failed to read {}: {}", slot, e);
                return None;
            }
        };
        let decoded = decode_snapshot(&raw);
        if decoded.is_none() {
            log::debug!("[STORE] Ignoring malformed record in {}", slot);
        }
        decoded
    }

    /// Delete the template's slot entirely
    pub fn remove(&self, key: TemplateKey) -> StorageResult<()> {
        self.storage.remove_item(&self.slot_key(key))
    }
}

/// A decoded record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot {
    pub items: Vec<ChecklistItem>,
    /// Entries were dropped or coerced, so the slot no longer matches `items`
    pub normalized: bool,
}

/// Decode a stored JSON snapshot.
///
/// Entries whose `text` is falsy, an object or an array are skipped; truthy
/// numbers and booleans become their string form. `checked` follows
/// JavaScript truthiness so records written by other tools still load.
pub fn decode_snapshot(raw: &str) -> Option<StoredSnapshot> {
    if raw.is_empty() {
        return None;
    }
    let parsed: Value = serde_json::from_str(raw).ok()?;
    let entries = parsed.as_array()?;

    let items: Vec<ChecklistItem> = entries
        .iter()
        .filter_map(|entry| {
            let text = label_text(entry.get("text")?)?;
            let checked = entry.get("checked").map(is_truthy).unwrap_or(false);
            Some(ChecklistItem::with_checked(text, checked))
        })
        .collect();

    let normalized = serde_json::to_value(&items)
        .map(|canonical| canonical != parsed)
        .unwrap_or(true);
    Some(StoredSnapshot { items, normalized })
}

fn label_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) => Some(value.to_string()),
        Value::Number(n) => Some(number_text(n)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `5.0` reads as "5", like `String(5.0)` in a browser
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

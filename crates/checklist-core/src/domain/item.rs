//! Checklist Item Entity
//!
//! A single labelled checkbox row.

use serde::Serialize;

/// One row of a checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// Label shown next to the checkbox
    pub text: String,
    /// Check state
    pub checked: bool,
}

impl ChecklistItem {
    /// Create a new unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }

    pub fn with_checked(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }

    /// Flip the check state, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = ChecklistItem::new("動作確認");
        assert_eq!(item.text, "動作確認");
        assert!(!item.checked);
    }

    #[test]
    fn test_item_toggle() {
        let mut item = ChecklistItem::new("付属品確認");
        assert!(item.toggle());
        assert!(item.checked);
        assert!(!item.toggle());
    }

    #[test]
    fn test_item_wire_format() {
        let item = ChecklistItem::with_checked("A", true);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"text":"A","checked":true}"#);
    }
}

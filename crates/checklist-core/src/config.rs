//! Application Configuration
//!
//! Defaults overridable from URL query parameters
//! (`?template=fork&log=debug`).

use log::LevelFilter;

use crate::domain::TemplateKey;

/// Namespace for persisted records
pub const DEFAULT_STORAGE_PREFIX: &str = "checklist_items_v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistConfig {
    /// Prefix of every persisted slot name
    pub storage_prefix: String,
    /// Template opened at startup
    pub initial_template: TemplateKey,
    /// Lowest level forwarded to the console
    pub log_level: String,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            initial_template: TemplateKey::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ChecklistConfig {
    /// Query parameters read by [`with_param`](Self::with_param)
    pub const QUERY_PARAMS: [&'static str; 2] = ["template", "log"];

    /// Apply one already-decoded query parameter.
    /// Unknown parameters and invalid values are ignored.
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        match name {
            "template" => {
                if let Some(key) = TemplateKey::parse(value) {
                    self.initial_template = key;
                }
            }
            "log" => {
                if value.parse::<LevelFilter>().is_ok() {
                    self.log_level = value.to_ascii_lowercase();
                }
            }
            _ => {}
        }
        self
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

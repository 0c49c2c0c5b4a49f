//! Selector configuration and file contracts

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::OptionSource;

/// Typed selector configuration
///
/// External payloads are converted into this struct field by field;
/// arbitrary shapes never reach selector state.
#[derive(Debug, Clone, Default)]
pub struct SelectorConfig {
    /// The option source (flat or grouped)
    pub options: OptionSource,
    /// Initially selected ids
    pub selected: HashSet<u64>,
    /// Expose a result count alongside filtered views
    pub show_count: bool,
}

impl SelectorConfig {
    /// Configuration with the given source and all defaults
    pub fn new(options: OptionSource) -> Self {
        Self {
            options,
            selected: HashSet::new(),
            show_count: false,
        }
    }

    #[must_use]
    pub fn with_selected(mut self, selected: impl IntoIterator<Item = u64>) -> Self {
        self.selected = selected.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_show_count(mut self, show_count: bool) -> Self {
        self.show_count = show_count;
        self
    }
}

/// On-disk options document
///
/// ```json
/// {
///   "options": [{ "id": 1, "label": "Ada" }, ...],
///   "selected": [1],
///   "show_count": true
/// }
/// ```
///
/// `options` may also be a list of `{ "label", "options" }` groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsDocument {
    pub options: OptionSource,
    #[serde(default)]
    pub selected: Vec<u64>,
    #[serde(default)]
    pub show_count: bool,
}

impl OptionsDocument {
    /// Load and validate an options document
    pub fn load(path: &Path) -> CoreResult<Self> {
        log::debug!("loading options document from {}", path.display());
        let raw = fs::read_to_string(path)?;
        let document: Self = serde_json::from_str(&raw)?;
        document.validate()?;
        Ok(document)
    }

    /// Reject documents whose ids collide
    ///
    /// Membership is keyed by id, so a duplicate would make two rows
    /// indistinguishable to every set operation.
    pub fn validate(&self) -> CoreResult<()> {
        let mut seen = HashSet::new();
        for option in self.options.iter_options() {
            if !seen.insert(option.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate option id {} (label: {})",
                    option.id, option.label
                )));
            }
        }
        Ok(())
    }

    /// Convert into the typed selector configuration
    pub fn into_config(self) -> SelectorConfig {
        SelectorConfig {
            options: self.options,
            selected: self.selected.into_iter().collect(),
            show_count: self.show_count,
        }
    }
}

/// Exported selection file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionExport {
    pub version: u32,
    /// Selected ids in source order
    pub selected: Vec<u64>,
}

impl SelectionExport {
    pub const VERSION: u32 = 1;

    pub fn new(selected: Vec<u64>) -> Self {
        Self {
            version: Self::VERSION,
            selected,
        }
    }

    /// Write the selection as pretty-printed JSON
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!(
            "wrote {} selected ids to {}",
            self.selected.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OptionGroup, OptionItem};

    #[test]
    fn document_defaults_apply() {
        let document: OptionsDocument =
            serde_json::from_str(r#"{ "options": [{"id": 1, "label": "A"}] }"#).unwrap();

        assert!(document.selected.is_empty());
        assert!(!document.show_count);
        assert!(document.validate().is_ok());
    }

    #[test]
    fn grouped_document_parses() {
        let document: OptionsDocument = serde_json::from_str(
            r#"{
                "options": [
                    { "label": "Staff", "options": [{"id": 1, "label": "Ada"}] },
                    { "label": "Guests", "options": [] }
                ],
                "selected": [1],
                "show_count": true
            }"#,
        )
        .unwrap();

        assert!(document.options.is_grouped());
        assert_eq!(document.selected, vec![1]);
        assert!(document.show_count);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let document = OptionsDocument {
            options: OptionSource::Grouped(vec![
                OptionGroup::new("A", vec![OptionItem::new(1, "x")]),
                OptionGroup::new("B", vec![OptionItem::new(1, "y")]),
            ]),
            selected: Vec::new(),
            show_count: false,
        };

        assert!(matches!(
            document.validate(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn config_builder_sets_fields() {
        let config = SelectorConfig::new(OptionSource::Flat(vec![OptionItem::new(1, "A")]))
            .with_selected([1])
            .with_show_count(true);

        assert!(config.selected.contains(&1));
        assert!(config.show_count);
    }
}

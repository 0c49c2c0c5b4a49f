//! Option list data types

use serde::{Deserialize, Serialize};

/// A selectable option
///
/// Immutable once loaded; membership is keyed by `id` everywhere, the
/// label is display data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: u64,
    pub label: String,
}

impl OptionItem {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// A labelled group of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<OptionItem>,
}

impl OptionGroup {
    pub fn new(label: impl Into<String>, options: Vec<OptionItem>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// The ordered option source, flat or grouped
///
/// Supplied once at construction and only ever read afterwards. The
/// variant carries the grouped/flat distinction, so no separate flag can
/// drift out of sync with the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionSource {
    Flat(Vec<OptionItem>),
    Grouped(Vec<OptionGroup>),
}

impl OptionSource {
    /// Whether the source carries group structure
    pub fn is_grouped(&self) -> bool {
        matches!(self, OptionSource::Grouped(_))
    }

    /// Iterate every option in source order, ignoring group boundaries
    pub fn iter_options(&self) -> Box<dyn Iterator<Item = &OptionItem> + '_> {
        match self {
            OptionSource::Flat(options) => Box::new(options.iter()),
            OptionSource::Grouped(groups) => {
                Box::new(groups.iter().flat_map(|group| group.options.iter()))
            }
        }
    }

    /// Total number of options (group headers excluded)
    pub fn option_count(&self) -> usize {
        self.iter_options().count()
    }

    /// Whether an id exists anywhere in the source
    pub fn contains_id(&self, id: u64) -> bool {
        self.iter_options().any(|option| option.id == id)
    }
}

impl Default for OptionSource {
    fn default() -> Self {
        OptionSource::Flat(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_source_iterates_in_order() {
        let source = OptionSource::Flat(vec![
            OptionItem::new(1, "A"),
            OptionItem::new(2, "B"),
            OptionItem::new(3, "C"),
        ]);

        let ids: Vec<u64> = source.iter_options().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!source.is_grouped());
        assert_eq!(source.option_count(), 3);
    }

    #[test]
    fn grouped_source_flattens_across_groups() {
        let source = OptionSource::Grouped(vec![
            OptionGroup::new("First", vec![OptionItem::new(1, "A"), OptionItem::new(2, "B")]),
            OptionGroup::new("Empty", vec![]),
            OptionGroup::new("Second", vec![OptionItem::new(3, "C")]),
        ]);

        let ids: Vec<u64> = source.iter_options().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(source.is_grouped());
        assert!(source.contains_id(3));
        assert!(!source.contains_id(4));
    }

    #[test]
    fn untagged_deserialization_distinguishes_shapes() {
        let flat: OptionSource =
            serde_json::from_str(r#"[{"id": 1, "label": "A"}]"#).unwrap();
        assert!(!flat.is_grouped());

        let grouped: OptionSource = serde_json::from_str(
            r#"[{"label": "G", "options": [{"id": 1, "label": "A"}]}]"#,
        )
        .unwrap();
        assert!(grouped.is_grouped());
    }
}

//! Derived view computation
//!
//! Both panes are recomputed from `(source, selected set)` by pure
//! functions after every mutation. Nothing here caches across calls;
//! the selector owns the results and the single entry point that
//! refreshes them.

use std::collections::HashSet;

use crate::filter;
use crate::types::{OptionGroup, OptionItem, OptionSource};

use super::Pane;

/// A derived display list, mirroring the source shape
///
/// Grouped sources derive grouped views; group order is kept and groups
/// whose members all landed in the other pane stay present (empty), so
/// renderers decide what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewList {
    Flat(Vec<OptionItem>),
    Grouped(Vec<OptionGroup>),
}

impl ViewList {
    /// Flatten to the row sequence used for indexing
    pub fn flatten(&self) -> Vec<OptionItem> {
        match self {
            ViewList::Flat(options) => options.clone(),
            ViewList::Grouped(groups) => groups
                .iter()
                .flat_map(|group| group.options.iter().cloned())
                .collect(),
        }
    }

    /// Number of option rows (group headers excluded)
    pub fn option_count(&self) -> usize {
        match self {
            ViewList::Flat(options) => options.len(),
            ViewList::Grouped(groups) => groups.iter().map(|group| group.options.len()).sum(),
        }
    }

    /// True when no option rows remain in any group
    pub fn is_empty(&self) -> bool {
        self.option_count() == 0
    }
}

fn keep(pane: Pane, selected: &HashSet<u64>, id: u64) -> bool {
    match pane {
        Pane::Available => !selected.contains(&id),
        Pane::Selected => selected.contains(&id),
    }
}

/// Derive one pane's unfiltered view
pub(super) fn derive(source: &OptionSource, selected: &HashSet<u64>, pane: Pane) -> ViewList {
    match source {
        OptionSource::Flat(options) => ViewList::Flat(
            options
                .iter()
                .filter(|option| keep(pane, selected, option.id))
                .cloned()
                .collect(),
        ),
        OptionSource::Grouped(groups) => ViewList::Grouped(
            groups
                .iter()
                .map(|group| OptionGroup {
                    label: group.label.clone(),
                    options: group
                        .options
                        .iter()
                        .filter(|option| keep(pane, selected, option.id))
                        .cloned()
                        .collect(),
                })
                .collect(),
        ),
    }
}

/// Filter a view against a normalized query, keeping group structure
pub(super) fn filter_view(view: &ViewList, normalized_query: &str) -> ViewList {
    match view {
        ViewList::Flat(options) => ViewList::Flat(
            options
                .iter()
                .filter(|option| filter::label_matches(&option.label, normalized_query))
                .cloned()
                .collect(),
        ),
        ViewList::Grouped(groups) => ViewList::Grouped(
            groups
                .iter()
                .map(|group| OptionGroup {
                    label: group.label.clone(),
                    options: group
                        .options
                        .iter()
                        .filter(|option| filter::label_matches(&option.label, normalized_query))
                        .cloned()
                        .collect(),
                })
                .collect(),
        ),
    }
}

//! Data contracts: option lists, selector configuration, file formats

mod config;
mod option;

pub use config::{OptionsDocument, SelectionExport, SelectorConfig};
pub use option::{OptionGroup, OptionItem, OptionSource};

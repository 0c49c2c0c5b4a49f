//! Picklist Core Library
//!
//! Platform-independent logic for the dual-list selector: one ordered
//! option source presented as two derived views (available / selected),
//! with visual staging, shift-range selection, diacritic-insensitive
//! filtering and a keyboard navigation contract.
//!
//! This library is UI-agnostic. Hosts translate pointer and keyboard
//! intent into operations on [`DualListSelector`], then read the derived
//! views back to render. Rendering, focus and layout are the host's job.

pub mod error;
pub mod filter;
pub mod profile;
pub mod selector;
pub mod subscription;
pub mod types;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use profile::PointerProfile;
pub use selector::{DualListSelector, Modifiers, Pane, PaneView, SelectorKey, ViewList};
pub use subscription::{ChangeKind, Subscription};
pub use types::{
    OptionGroup, OptionItem, OptionSource, OptionsDocument, SelectionExport, SelectorConfig,
};

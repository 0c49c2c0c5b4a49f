//! Live pointer capability handle
//!
//! The terminal counterpart of a `(hover: none) and (pointer: coarse)`
//! media query: a shared boolean the host keeps current and the selector
//! consults on every plain-click decision. On coarse (touch-like)
//! profiles a plain click stages additively; on fine-pointer profiles it
//! stages exclusively.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared coarse/fine pointer flag
///
/// Cloning yields another handle onto the same flag, so a host keeps one
/// side and injects the other into a selector at construction. Updates
/// through any handle are visible to all of them immediately.
#[derive(Debug, Clone, Default)]
pub struct PointerProfile {
    coarse: Arc<AtomicBool>,
}

impl PointerProfile {
    /// Handle with the given initial capability
    pub fn new(coarse: bool) -> Self {
        Self {
            coarse: Arc::new(AtomicBool::new(coarse)),
        }
    }

    /// True when the primary input is touch-like (coarse, no hover)
    pub fn is_coarse(&self) -> bool {
        self.coarse.load(Ordering::Relaxed)
    }

    /// Record a capability change (e.g. a mouse was attached)
    pub fn set_coarse(&self, coarse: bool) {
        self.coarse.store(coarse, Ordering::Relaxed);
    }

    /// Flip the capability, returning the new value
    pub fn toggle(&self) -> bool {
        let coarse = !self.is_coarse();
        self.set_coarse(coarse);
        coarse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_flag() {
        let host_side = PointerProfile::new(false);
        let selector_side = host_side.clone();

        assert!(!selector_side.is_coarse());
        host_side.set_coarse(true);
        assert!(selector_side.is_coarse());
    }

    #[test]
    fn toggle_flips_and_reports() {
        let profile = PointerProfile::new(false);
        assert!(profile.toggle());
        assert!(profile.is_coarse());
        assert!(!profile.toggle());
    }
}

//! Dual-list selector state and operations
//!
//! One ordered source plus a selected-id set, presented as two derived
//! views. All mutation goes through the methods here; each one finishes
//! by rederiving whatever it invalidated and notifying subscribers, so
//! consumers never observe a half-updated state.

mod view;

pub use view::ViewList;

use std::collections::HashSet;

use crate::filter;
use crate::profile::PointerProfile;
use crate::subscription::{ChangeKind, Notifier, Subscription};
use crate::types::{OptionItem, OptionSource, SelectorConfig};

/// One of the two panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Left pane: options not yet selected
    Available,
    /// Right pane: options in the selected set
    Selected,
}

impl Pane {
    /// The other pane
    pub fn opposite(self) -> Pane {
        match self {
            Pane::Available => Pane::Selected,
            Pane::Selected => Pane::Available,
        }
    }

    fn idx(self) -> usize {
        match self {
            Pane::Available => 0,
            Pane::Selected => 1,
        }
    }
}

/// Pointer modifier state at the moment of a click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
    };
}

/// Semantic keys of the keyboard navigation contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKey {
    Up,
    Down,
    Home,
    End,
    Space,
    Enter,
}

/// Per-pane transient state
#[derive(Debug, Default)]
struct PaneState {
    /// Visually staged ids (highlighted, not yet moved)
    visual: HashSet<u64>,
    /// Range anchor: index of the last visual pick in the unfiltered rows
    anchor: Option<usize>,
    /// Raw filter query
    query: String,
    /// Cursor index into the filtered rows
    cursor: usize,
}

/// One pane's derived data
#[derive(Debug, Clone)]
pub struct PaneView {
    /// Unfiltered view in display shape
    pub list: ViewList,
    /// Unfiltered row sequence; the index space for anchors and ranges
    pub rows: Vec<OptionItem>,
    /// Filtered view in display shape
    pub filtered: ViewList,
    /// Filtered row sequence; what the cursor walks
    pub filtered_rows: Vec<OptionItem>,
    /// A non-blank query matched nothing
    pub no_results: bool,
}

impl PaneView {
    fn empty() -> Self {
        Self {
            list: ViewList::Flat(Vec::new()),
            rows: Vec::new(),
            filtered: ViewList::Flat(Vec::new()),
            filtered_rows: Vec::new(),
            no_results: false,
        }
    }

    /// Result count for the count side channel
    pub fn filtered_count(&self) -> usize {
        self.filtered_rows.len()
    }
}

/// The dual-list selector
#[derive(Debug)]
pub struct DualListSelector {
    source: OptionSource,
    selected: HashSet<u64>,
    show_count: bool,
    profile: PointerProfile,
    panes: [PaneState; 2],
    views: [PaneView; 2],
    notifier: Notifier,
}

impl DualListSelector {
    /// Build a selector from its typed configuration
    ///
    /// Selected ids that do not exist in the source are dropped up front,
    /// so both invariants (membership only references source ids; every
    /// source id sits in exactly one view) hold from the first frame.
    pub fn new(config: SelectorConfig, profile: PointerProfile) -> Self {
        let SelectorConfig {
            options,
            selected,
            show_count,
        } = config;

        let known: HashSet<u64> = options.iter_options().map(|option| option.id).collect();
        let dropped = selected.iter().filter(|id| !known.contains(id)).count();
        if dropped > 0 {
            log::warn!("dropping {dropped} selected ids not present in the source");
        }
        let selected: HashSet<u64> = selected
            .into_iter()
            .filter(|id| known.contains(id))
            .collect();

        let mut selector = Self {
            source: options,
            selected,
            show_count,
            profile,
            panes: [PaneState::default(), PaneState::default()],
            views: [PaneView::empty(), PaneView::empty()],
            notifier: Notifier::default(),
        };
        selector.resync();
        selector
    }

    // ========== 查询接口 / accessors ==========

    /// Derived data for one pane
    pub fn view(&self, pane: Pane) -> &PaneView {
        &self.views[pane.idx()]
    }

    /// The read-only option source
    pub fn source(&self) -> &OptionSource {
        &self.source
    }

    /// Current selected-id set
    pub fn selected_ids(&self) -> &HashSet<u64> {
        &self.selected
    }

    /// Selected ids in source order
    pub fn selected_in_order(&self) -> Vec<u64> {
        self.source
            .iter_options()
            .filter(|option| self.selected.contains(&option.id))
            .map(|option| option.id)
            .collect()
    }

    /// Whether an id is visually staged in a pane
    pub fn is_visually_selected(&self, pane: Pane, id: u64) -> bool {
        self.panes[pane.idx()].visual.contains(&id)
    }

    /// Number of staged rows in a pane
    pub fn visual_count(&self, pane: Pane) -> usize {
        self.panes[pane.idx()].visual.len()
    }

    /// Cursor index into the pane's filtered rows
    pub fn cursor(&self, pane: Pane) -> usize {
        self.panes[pane.idx()].cursor
    }

    /// The row under the pane's cursor
    pub fn cursor_row(&self, pane: Pane) -> Option<&OptionItem> {
        self.views[pane.idx()]
            .filtered_rows
            .get(self.panes[pane.idx()].cursor)
    }

    /// Range anchor of a pane
    pub fn anchor(&self, pane: Pane) -> Option<usize> {
        self.panes[pane.idx()].anchor
    }

    /// Raw query of a pane
    pub fn query(&self, pane: Pane) -> &str {
        &self.panes[pane.idx()].query
    }

    /// Whether the result-count side channel is enabled
    pub fn show_count(&self) -> bool {
        self.show_count
    }

    /// The injected pointer capability handle
    pub fn pointer_profile(&self) -> &PointerProfile {
        &self.profile
    }

    /// Register a change observer; dropping the guard unregisters it
    pub fn subscribe(&self, listener: impl Fn(ChangeKind) + 'static) -> Subscription {
        self.notifier.subscribe(listener)
    }

    // ========== 视觉选择 / visual staging ==========

    /// Toggle a row's visual staging from a pointer event
    ///
    /// Precedence: additive (ctrl), range (shift with an anchor), plain.
    /// A plain pick on a fine-pointer profile replaces the staging; on a
    /// coarse (touch-like) profile it adds to it. Shift without an anchor
    /// degrades to plain. Unknown ids are ignored.
    pub fn toggle_visual(&mut self, pane: Pane, target_id: u64, modifiers: Modifiers) {
        let idx = pane.idx();
        let Some(index) = self.views[idx]
            .rows
            .iter()
            .position(|option| option.id == target_id)
        else {
            log::debug!("ignoring visual toggle for unknown id {target_id}");
            return;
        };

        let anchor = self.panes[idx].anchor;
        match (modifiers.ctrl, modifiers.shift, anchor) {
            // 多选切换
            (true, _, _) => {
                let state = &mut self.panes[idx];
                if !state.visual.remove(&target_id) {
                    state.visual.insert(target_id);
                }
                state.anchor = Some(index);
            }

            // 范围选择：锚点保持不变
            (false, true, Some(from)) => {
                let rows = &self.views[idx].rows;
                let start = from.min(index);
                let end = from.max(index).min(rows.len().saturating_sub(1));
                let span: Vec<u64> = rows[start..=end].iter().map(|option| option.id).collect();
                self.panes[idx].visual.extend(span);
            }

            // 普通点击
            (false, _, _) => {
                let coarse = self.profile.is_coarse();
                let state = &mut self.panes[idx];
                if state.visual.contains(&target_id) {
                    state.visual.remove(&target_id);
                } else {
                    if !coarse {
                        state.visual.clear();
                    }
                    state.visual.insert(target_id);
                }
                state.anchor = Some(index);
            }
        }

        self.notifier.notify(ChangeKind::Staging);
    }

    /// Stage every row currently visible (filtered) in a pane
    pub fn select_all_visual(&mut self, pane: Pane) {
        let idx = pane.idx();
        let visible: Vec<u64> = self.views[idx]
            .filtered_rows
            .iter()
            .map(|option| option.id)
            .collect();
        let state = &mut self.panes[idx];
        state.visual.extend(visible);
        state.anchor = None;
        self.notifier.notify(ChangeKind::Staging);
    }

    /// Clear a pane's visual staging
    pub fn clear_all_visual(&mut self, pane: Pane) {
        let state = &mut self.panes[pane.idx()];
        state.visual.clear();
        state.anchor = None;
        self.notifier.notify(ChangeKind::Staging);
    }

    // ========== 移动操作 / moves ==========

    /// Move every staged row of a pane to the opposite pane
    ///
    /// A no-op when nothing is staged.
    pub fn move_staged(&mut self, pane: Pane) {
        let idx = pane.idx();
        if self.panes[idx].visual.is_empty() {
            return;
        }

        let staged: Vec<u64> = self.panes[idx].visual.drain().collect();
        for id in staged {
            self.flip_membership(pane, id);
        }
        self.panes[idx].anchor = None;
        self.resync();
        self.notifier.notify(ChangeKind::Membership);
    }

    /// Move a single row to the opposite pane
    ///
    /// Used by a per-row move affordance; only that pane's staging loses
    /// the id. Unknown ids are ignored.
    pub fn move_one(&mut self, pane: Pane, id: u64) {
        if !self.source.contains_id(id) {
            log::debug!("ignoring move for unknown id {id}");
            return;
        }

        self.flip_membership(pane, id);
        let state = &mut self.panes[pane.idx()];
        state.visual.remove(&id);
        state.anchor = None;
        self.resync();
        self.notifier.notify(ChangeKind::Membership);
    }

    /// Move every option of a pane's unfiltered view to the opposite pane
    ///
    /// An active filter is intentionally not applied here; the operation
    /// covers the whole view.
    pub fn move_all(&mut self, from: Pane) {
        let idx = from.idx();
        match from {
            Pane::Available => {
                let all: Vec<u64> = self.views[idx]
                    .rows
                    .iter()
                    .map(|option| option.id)
                    .collect();
                self.selected.extend(all);
            }
            Pane::Selected => {
                self.selected.clear();
            }
        }
        let state = &mut self.panes[idx];
        state.visual.clear();
        state.anchor = None;
        self.resync();
        self.notifier.notify(ChangeKind::Membership);
    }

    // ========== 过滤 / filtering ==========

    /// Replace a pane's filter query and rederive its filtered view
    pub fn set_query(&mut self, pane: Pane, query: impl Into<String>) {
        self.panes[pane.idx()].query = query.into();
        self.resync();
        self.notifier.notify(ChangeKind::Filter);
    }

    /// Clear a pane's filter query
    pub fn clear_query(&mut self, pane: Pane) {
        self.set_query(pane, "");
    }

    // ========== 键盘契约 / keyboard contract ==========

    /// Keyboard navigation for the focused pane
    ///
    /// Down/Up wrap around the visible rows, Home/End jump, Space toggles
    /// the cursor row's staging (always a toggle, no pointer-profile
    /// branch), Enter moves the staged rows. Returns true when the key
    /// was consumed so hosts can suppress any default scrolling.
    pub fn handle_key(&mut self, pane: Pane, key: SelectorKey) -> bool {
        let idx = pane.idx();
        let visible = self.views[idx].filtered_rows.len();
        match key {
            SelectorKey::Down => {
                if visible > 0 {
                    let state = &mut self.panes[idx];
                    state.cursor = if state.cursor + 1 >= visible {
                        0
                    } else {
                        state.cursor + 1
                    };
                    self.notifier.notify(ChangeKind::Cursor);
                }
                true
            }
            SelectorKey::Up => {
                if visible > 0 {
                    let state = &mut self.panes[idx];
                    state.cursor = if state.cursor == 0 {
                        visible - 1
                    } else {
                        state.cursor - 1
                    };
                    self.notifier.notify(ChangeKind::Cursor);
                }
                true
            }
            SelectorKey::Home => {
                if visible > 0 {
                    self.panes[idx].cursor = 0;
                    self.notifier.notify(ChangeKind::Cursor);
                }
                true
            }
            SelectorKey::End => {
                if visible > 0 {
                    self.panes[idx].cursor = visible - 1;
                    self.notifier.notify(ChangeKind::Cursor);
                }
                true
            }
            SelectorKey::Space => {
                if let Some(id) = self.cursor_row(pane).map(|option| option.id) {
                    self.toggle_visual_always(pane, id);
                }
                true
            }
            SelectorKey::Enter => {
                self.move_staged(pane);
                true
            }
        }
    }

    // ========== 内部 / internals ==========

    /// Unconditional staging toggle (the Space behavior)
    fn toggle_visual_always(&mut self, pane: Pane, target_id: u64) {
        let idx = pane.idx();
        let Some(index) = self.views[idx]
            .rows
            .iter()
            .position(|option| option.id == target_id)
        else {
            return;
        };

        let state = &mut self.panes[idx];
        if !state.visual.remove(&target_id) {
            state.visual.insert(target_id);
        }
        state.anchor = Some(index);
        self.notifier.notify(ChangeKind::Staging);
    }

    fn flip_membership(&mut self, pane: Pane, id: u64) {
        match pane {
            Pane::Available => {
                self.selected.insert(id);
            }
            Pane::Selected => {
                self.selected.remove(&id);
            }
        }
    }

    /// Rederive both panes and clamp their cursors
    fn resync(&mut self) {
        for pane in [Pane::Available, Pane::Selected] {
            let idx = pane.idx();
            let list = view::derive(&self.source, &self.selected, pane);
            let rows = list.flatten();
            let (filtered, no_results) = Self::apply_query(&list, &self.panes[idx].query);
            let filtered_rows = filtered.flatten();

            let visible = filtered_rows.len();
            let state = &mut self.panes[idx];
            if visible == 0 {
                state.cursor = 0;
            } else if state.cursor >= visible {
                state.cursor = visible - 1;
            }

            self.views[idx] = PaneView {
                list,
                rows,
                filtered,
                filtered_rows,
                no_results,
            };
        }
    }

    /// Apply a raw query to an unfiltered view
    ///
    /// A blank query, or an already-empty view, passes through unfiltered
    /// with the no-results indicator hidden.
    fn apply_query(list: &ViewList, query: &str) -> (ViewList, bool) {
        let trimmed = query.trim();
        if trimmed.is_empty() || list.is_empty() {
            return (list.clone(), false);
        }

        let normalized = filter::normalize_for_match(trimmed);
        let filtered = view::filter_view(list, &normalized);
        let no_results = filtered.is_empty();
        (filtered, no_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OptionGroup, OptionItem};

    fn flat_selector() -> DualListSelector {
        let options = OptionSource::Flat(vec![
            OptionItem::new(1, "Ada"),
            OptionItem::new(2, "Grace"),
            OptionItem::new(3, "José"),
            OptionItem::new(4, "Linus"),
        ]);
        DualListSelector::new(SelectorConfig::new(options), PointerProfile::new(false))
    }

    fn ids(view: &PaneView) -> Vec<u64> {
        view.rows.iter().map(|option| option.id).collect()
    }

    #[test]
    fn construction_partitions_by_initial_selection() {
        let options = OptionSource::Flat(vec![
            OptionItem::new(1, "Ada"),
            OptionItem::new(2, "Grace"),
        ]);
        let config = SelectorConfig::new(options).with_selected([2]);
        let selector = DualListSelector::new(config, PointerProfile::new(false));

        assert_eq!(ids(selector.view(Pane::Available)), vec![1]);
        assert_eq!(ids(selector.view(Pane::Selected)), vec![2]);
    }

    #[test]
    fn construction_drops_unknown_selected_ids() {
        let options = OptionSource::Flat(vec![OptionItem::new(1, "Ada")]);
        let config = SelectorConfig::new(options).with_selected([1, 99]);
        let selector = DualListSelector::new(config, PointerProfile::new(false));

        assert_eq!(selector.selected_ids().len(), 1);
        assert!(selector.selected_ids().contains(&1));
    }

    #[test]
    fn plain_click_is_exclusive_on_fine_pointers() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 2, Modifiers::NONE);

        assert!(!selector.is_visually_selected(Pane::Available, 1));
        assert!(selector.is_visually_selected(Pane::Available, 2));
        assert_eq!(selector.anchor(Pane::Available), Some(1));
    }

    #[test]
    fn plain_click_is_additive_on_coarse_pointers() {
        let profile = PointerProfile::new(true);
        let options = OptionSource::Flat(vec![
            OptionItem::new(1, "Ada"),
            OptionItem::new(2, "Grace"),
        ]);
        let mut selector = DualListSelector::new(SelectorConfig::new(options), profile);

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 2, Modifiers::NONE);

        assert!(selector.is_visually_selected(Pane::Available, 1));
        assert!(selector.is_visually_selected(Pane::Available, 2));
    }

    #[test]
    fn capability_change_applies_to_the_next_click() {
        let profile = PointerProfile::new(true);
        let options = OptionSource::Flat(vec![
            OptionItem::new(1, "Ada"),
            OptionItem::new(2, "Grace"),
        ]);
        let mut selector =
            DualListSelector::new(SelectorConfig::new(options), profile.clone());

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);

        // A fine pointer was attached at runtime
        profile.set_coarse(false);
        selector.toggle_visual(Pane::Available, 2, Modifiers::NONE);

        assert!(!selector.is_visually_selected(Pane::Available, 1));
        assert!(selector.is_visually_selected(Pane::Available, 2));
    }

    #[test]
    fn plain_click_on_staged_row_unstages_it() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);

        assert_eq!(selector.visual_count(Pane::Available), 0);
    }

    #[test]
    fn ctrl_click_toggles_without_clearing() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 3, Modifiers::CTRL);

        assert!(selector.is_visually_selected(Pane::Available, 1));
        assert!(selector.is_visually_selected(Pane::Available, 3));
        assert_eq!(selector.anchor(Pane::Available), Some(2));

        selector.toggle_visual(Pane::Available, 3, Modifiers::CTRL);
        assert!(!selector.is_visually_selected(Pane::Available, 3));
    }

    #[test]
    fn shift_click_stages_a_range_in_either_direction() {
        let mut selector = flat_selector();

        // Downward: anchor on the first row, extend to the third
        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 3, Modifiers::SHIFT);
        let downward: HashSet<u64> = [1, 2, 3].into_iter().collect();
        assert_eq!(selector.panes[0].visual, downward);

        // Upward from a fresh staging yields the same set
        selector.clear_all_visual(Pane::Available);
        selector.toggle_visual(Pane::Available, 3, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 1, Modifiers::SHIFT);
        assert_eq!(selector.panes[0].visual, downward);
    }

    #[test]
    fn shift_click_keeps_the_anchor() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 2, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 4, Modifiers::SHIFT);

        assert_eq!(selector.anchor(Pane::Available), Some(1));
    }

    #[test]
    fn shift_click_without_anchor_degrades_to_plain() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 2, Modifiers::SHIFT);

        assert_eq!(selector.visual_count(Pane::Available), 1);
        assert!(selector.is_visually_selected(Pane::Available, 2));
        assert_eq!(selector.anchor(Pane::Available), Some(1));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 99, Modifiers::NONE);
        assert_eq!(selector.visual_count(Pane::Available), 0);

        selector.move_one(Pane::Available, 99);
        assert!(selector.selected_ids().is_empty());
    }

    #[test]
    fn select_all_respects_the_active_filter() {
        let mut selector = flat_selector();

        selector.set_query(Pane::Available, "a");
        selector.select_all_visual(Pane::Available);

        // "a" matches Ada and Grace but neither José nor Linus
        assert!(selector.is_visually_selected(Pane::Available, 1));
        assert!(selector.is_visually_selected(Pane::Available, 2));
        assert!(!selector.is_visually_selected(Pane::Available, 3));
        assert!(!selector.is_visually_selected(Pane::Available, 4));
        assert_eq!(selector.anchor(Pane::Available), None);
    }

    #[test]
    fn clear_all_resets_staging_and_anchor() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.clear_all_visual(Pane::Available);

        assert_eq!(selector.visual_count(Pane::Available), 0);
        assert_eq!(selector.anchor(Pane::Available), None);
    }

    #[test]
    fn move_staged_flips_membership_and_clears_staging() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 2, Modifiers::NONE);
        selector.move_staged(Pane::Available);

        assert_eq!(ids(selector.view(Pane::Available)), vec![1, 3, 4]);
        assert_eq!(ids(selector.view(Pane::Selected)), vec![2]);
        assert_eq!(selector.visual_count(Pane::Available), 0);
        assert_eq!(selector.anchor(Pane::Available), None);
    }

    #[test]
    fn move_staged_with_empty_staging_is_a_noop() {
        let mut selector = flat_selector();
        let notified = std::rc::Rc::new(std::cell::Cell::new(0));
        let notified_in_listener = std::rc::Rc::clone(&notified);
        let _guard =
            selector.subscribe(move |_| notified_in_listener.set(notified_in_listener.get() + 1));

        selector.move_staged(Pane::Available);

        assert!(selector.selected_ids().is_empty());
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn move_is_idempotent_over_membership() {
        let mut selector = flat_selector();

        selector.move_one(Pane::Available, 2);
        let after_first: Vec<u64> = selector.selected_in_order();
        selector.move_one(Pane::Available, 2);

        assert_eq!(selector.selected_in_order(), after_first);
    }

    #[test]
    fn move_one_only_unstages_in_its_own_pane() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 2, Modifiers::CTRL);
        selector.move_one(Pane::Available, 2);

        assert!(selector.is_visually_selected(Pane::Available, 1));
        assert!(!selector.is_visually_selected(Pane::Available, 2));
        assert_eq!(ids(selector.view(Pane::Selected)), vec![2]);
    }

    #[test]
    fn move_all_ignores_the_active_filter() {
        let mut selector = flat_selector();

        selector.set_query(Pane::Available, "jose");
        selector.move_all(Pane::Available);

        assert_eq!(selector.selected_ids().len(), 4);
        assert!(selector.view(Pane::Available).rows.is_empty());
    }

    #[test]
    fn move_all_back_clears_the_selection() {
        let options = OptionSource::Flat(vec![
            OptionItem::new(1, "Ada"),
            OptionItem::new(2, "Grace"),
        ]);
        let config = SelectorConfig::new(options).with_selected([1, 2]);
        let mut selector = DualListSelector::new(config, PointerProfile::new(false));

        selector.move_all(Pane::Selected);

        assert!(selector.selected_ids().is_empty());
        assert_eq!(ids(selector.view(Pane::Available)), vec![1, 2]);
    }

    #[test]
    fn blank_query_returns_the_unfiltered_view() {
        let mut selector = flat_selector();

        selector.set_query(Pane::Available, "   ");

        let view = selector.view(Pane::Available);
        assert_eq!(view.filtered_rows.len(), view.rows.len());
        assert!(!view.no_results);
    }

    #[test]
    fn filter_matches_ignore_diacritics() {
        let mut selector = flat_selector();

        selector.set_query(Pane::Available, "jose");

        let view = selector.view(Pane::Available);
        assert_eq!(view.filtered_rows.len(), 1);
        assert_eq!(view.filtered_rows[0].id, 3);
        assert!(!view.no_results);
    }

    #[test]
    fn unmatched_query_raises_no_results() {
        let mut selector = flat_selector();

        selector.set_query(Pane::Available, "zzz");

        assert!(selector.view(Pane::Available).no_results);
        assert_eq!(selector.view(Pane::Available).filtered_count(), 0);
    }

    #[test]
    fn filtering_an_empty_view_keeps_the_indicator_hidden() {
        let mut selector = flat_selector();

        // The selected pane starts empty
        selector.set_query(Pane::Selected, "anything");

        let view = selector.view(Pane::Selected);
        assert!(view.filtered_rows.is_empty());
        assert!(!view.no_results);
    }

    #[test]
    fn keyboard_navigation_wraps_at_both_ends() {
        let mut selector = flat_selector();

        assert_eq!(selector.cursor(Pane::Available), 0);
        selector.handle_key(Pane::Available, SelectorKey::Up);
        assert_eq!(selector.cursor(Pane::Available), 3);
        selector.handle_key(Pane::Available, SelectorKey::Down);
        assert_eq!(selector.cursor(Pane::Available), 0);
    }

    #[test]
    fn keyboard_home_and_end_jump() {
        let mut selector = flat_selector();

        selector.handle_key(Pane::Available, SelectorKey::End);
        assert_eq!(selector.cursor(Pane::Available), 3);
        selector.handle_key(Pane::Available, SelectorKey::Home);
        assert_eq!(selector.cursor(Pane::Available), 0);
    }

    #[test]
    fn space_always_toggles_even_on_fine_pointers() {
        let mut selector = flat_selector();

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.handle_key(Pane::Available, SelectorKey::Down);
        selector.handle_key(Pane::Available, SelectorKey::Space);

        // A plain click would have cleared row 1; Space must not
        assert!(selector.is_visually_selected(Pane::Available, 1));
        assert!(selector.is_visually_selected(Pane::Available, 2));
    }

    #[test]
    fn space_sets_the_anchor_to_the_cursor_row() {
        let mut selector = flat_selector();

        selector.handle_key(Pane::Available, SelectorKey::Down);
        selector.handle_key(Pane::Available, SelectorKey::Space);

        assert_eq!(selector.anchor(Pane::Available), Some(1));
    }

    #[test]
    fn enter_moves_the_staged_rows_of_the_focused_pane() {
        let mut selector = flat_selector();

        selector.handle_key(Pane::Available, SelectorKey::Space);
        selector.handle_key(Pane::Available, SelectorKey::Enter);

        assert_eq!(ids(selector.view(Pane::Selected)), vec![1]);
    }

    #[test]
    fn keys_report_consumed_even_on_empty_panes() {
        let mut selector = flat_selector();
        assert!(selector.handle_key(Pane::Selected, SelectorKey::Down));
        assert!(selector.handle_key(Pane::Selected, SelectorKey::Space));
    }

    #[test]
    fn cursor_clamps_when_the_filter_shrinks_the_view() {
        let mut selector = flat_selector();

        selector.handle_key(Pane::Available, SelectorKey::End);
        selector.set_query(Pane::Available, "jose");

        assert_eq!(selector.cursor(Pane::Available), 0);
    }

    #[test]
    fn grouped_mode_ranges_span_group_boundaries() {
        let options = OptionSource::Grouped(vec![
            OptionGroup::new(
                "North",
                vec![OptionItem::new(1, "Ada"), OptionItem::new(2, "Grace")],
            ),
            OptionGroup::new("South", vec![OptionItem::new(3, "José")]),
        ]);
        let mut selector =
            DualListSelector::new(SelectorConfig::new(options), PointerProfile::new(false));

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.toggle_visual(Pane::Available, 3, Modifiers::SHIFT);

        assert_eq!(selector.visual_count(Pane::Available), 3);
    }

    #[test]
    fn subscribers_hear_each_mutation_kind() {
        let mut selector = flat_selector();
        let changes = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let changes_in_listener = std::rc::Rc::clone(&changes);
        let _guard = selector.subscribe(move |change| changes_in_listener.borrow_mut().push(change));

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        selector.move_staged(Pane::Available);
        selector.set_query(Pane::Available, "a");
        selector.handle_key(Pane::Available, SelectorKey::Down);

        assert_eq!(
            *changes.borrow(),
            vec![
                ChangeKind::Staging,
                ChangeKind::Membership,
                ChangeKind::Filter,
                ChangeKind::Cursor,
            ]
        );
    }

    #[test]
    fn dropped_subscription_stops_hearing_mutations() {
        let mut selector = flat_selector();
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let hits_in_listener = std::rc::Rc::clone(&hits);
        let guard =
            selector.subscribe(move |_| hits_in_listener.set(hits_in_listener.get() + 1));

        selector.toggle_visual(Pane::Available, 1, Modifiers::NONE);
        drop(guard);
        selector.toggle_visual(Pane::Available, 2, Modifiers::NONE);

        assert_eq!(hits.get(), 1);
    }
}

//! 面板行的展示投影
//!
//! 把一个面板的过滤后视图展开成逐行的展示序列（分组标题行 +
//! 选项行 + 无结果提示行）。View 层按它渲染，Event 层按它做
//! 鼠标命中测试，两边必须走同一套投影和滚动计算。

use picklist_core::{OptionItem, PaneView, ViewList};

/// 面板中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    /// 分组标题
    GroupHeader(String),
    /// 可交互的选项行
    Option(OptionItem),
    /// “无结果”提示
    NoResults,
}

/// 展开一个面板的展示行
///
/// 分组视图保留空组的标题行，过滤后结构不变。
pub fn display_rows(view: &PaneView) -> Vec<DisplayRow> {
    if view.no_results {
        return vec![DisplayRow::NoResults];
    }

    match &view.filtered {
        ViewList::Flat(options) => options.iter().cloned().map(DisplayRow::Option).collect(),
        ViewList::Grouped(groups) => {
            let mut rows = Vec::new();
            for group in groups {
                rows.push(DisplayRow::GroupHeader(group.label.clone()));
                for option in &group.options {
                    rows.push(DisplayRow::Option(option.clone()));
                }
            }
            rows
        }
    }
}

/// 光标所在选项行的展示行下标
///
/// `cursor` 是过滤后选项行的序号；展示序列里夹着标题行，
/// 所以要数过去。
pub fn display_cursor(rows: &[DisplayRow], cursor: usize) -> usize {
    let mut seen_options = 0;
    for (index, row) in rows.iter().enumerate() {
        if matches!(row, DisplayRow::Option(_)) {
            if seen_options == cursor {
                return index;
            }
            seen_options += 1;
        }
    }
    0
}

/// 保持光标可见的滚动偏移
pub fn scroll_offset(display_cursor: usize, viewport_height: usize) -> usize {
    if viewport_height == 0 || display_cursor < viewport_height {
        0
    } else {
        display_cursor + 1 - viewport_height
    }
}

/// 某个展示行下标对应的选项 id（标题行与提示行返回 None）
pub fn option_at(rows: &[DisplayRow], display_index: usize) -> Option<u64> {
    match rows.get(display_index) {
        Some(DisplayRow::Option(option)) => Some(option.id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklist_core::{
        DualListSelector, OptionGroup, OptionSource, Pane, PointerProfile, SelectorConfig,
    };

    fn grouped_view() -> Vec<DisplayRow> {
        let options = OptionSource::Grouped(vec![
            OptionGroup::new(
                "North",
                vec![OptionItem::new(1, "Ada"), OptionItem::new(2, "Grace")],
            ),
            OptionGroup::new("South", vec![OptionItem::new(3, "José")]),
        ]);
        let selector =
            DualListSelector::new(SelectorConfig::new(options), PointerProfile::new(false));
        display_rows(selector.view(Pane::Available))
    }

    #[test]
    fn grouped_projection_interleaves_headers() {
        let rows = grouped_view();
        assert_eq!(rows.len(), 5);
        assert!(matches!(rows[0], DisplayRow::GroupHeader(_)));
        assert!(matches!(rows[1], DisplayRow::Option(_)));
        assert!(matches!(rows[3], DisplayRow::GroupHeader(_)));
    }

    #[test]
    fn display_cursor_skips_headers() {
        let rows = grouped_view();
        // 第 2 个选项行（Grace）排在一个标题行之后
        assert_eq!(display_cursor(&rows, 1), 2);
        // 第 3 个选项行（José）前面有两个标题行
        assert_eq!(display_cursor(&rows, 2), 4);
    }

    #[test]
    fn option_lookup_ignores_headers() {
        let rows = grouped_view();
        assert_eq!(option_at(&rows, 0), None);
        assert_eq!(option_at(&rows, 1), Some(1));
        assert_eq!(option_at(&rows, 4), Some(3));
        assert_eq!(option_at(&rows, 99), None);
    }

    #[test]
    fn scroll_keeps_the_cursor_inside_the_viewport() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(9, 5), 5);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}

//! 双面板组件
//!
//! 每个面板：标题（含计数）+ 过滤行 + 选项列表。
//! 列表的行序列与滚动偏移来自 model::rows，Event 层的鼠标
//! 命中测试走的是同一套计算。

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use picklist_core::Pane;

use crate::i18n::t;
use crate::model::{self, App, DisplayRow};
use crate::view::layout::PaneAreas;
use crate::view::theme::colors;

/// 渲染一个面板
pub fn render(app: &App, frame: &mut Frame, pane: Pane, areas: &PaneAreas) {
    let texts = t();
    let c = colors();
    let view = app.selector.view(pane);
    let focused = app.focus == pane && !app.modal.is_open();

    // 面板标题：名称 + 计数（过滤时为 可见/总数）
    let name = match pane {
        Pane::Available => texts.panes.available,
        Pane::Selected => texts.panes.selected,
    };
    let title = if app.selector.show_count() && !app.selector.query(pane).trim().is_empty() {
        format!(" {} ({}/{}) ", name, view.filtered_count(), view.rows.len())
    } else {
        format!(" {} ({}) ", name, view.rows.len())
    };

    let border_style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(block, areas.block);

    render_filter_line(app, frame, pane, areas);
    render_list(app, frame, pane, areas);
}

/// 渲染过滤输入行
fn render_filter_line(app: &App, frame: &mut Frame, pane: Pane, areas: &PaneAreas) {
    let texts = t();
    let c = colors();
    let query = app.selector.query(pane);
    let editing = app.search.editing && app.focus == pane;

    let line = if editing {
        // 输入中：显示查询与光标
        Line::from(vec![
            Span::styled("/", Style::default().fg(c.highlight)),
            Span::styled(query.to_string(), Style::default().fg(c.fg)),
            Span::styled("▏", Style::default().fg(c.highlight)),
        ])
    } else if !query.trim().is_empty() {
        Line::from(vec![
            Span::styled("/", Style::default().fg(c.muted)),
            Span::styled(query.to_string(), Style::default().fg(c.fg)),
        ])
    } else {
        Line::from(Span::styled(
            format!("/ {}", texts.panes.filter_hint),
            Style::default().fg(c.muted),
        ))
    };

    frame.render_widget(Paragraph::new(line), areas.filter);
}

/// 渲染选项列表
fn render_list(app: &App, frame: &mut Frame, pane: Pane, areas: &PaneAreas) {
    let texts = t();
    let c = colors();
    let view = app.selector.view(pane);
    let focused = app.focus == pane && !app.modal.is_open();

    let rows = model::display_rows(view);
    let cursor_display = model::display_cursor(&rows, app.selector.cursor(pane));
    let height = areas.list.height as usize;
    let scroll = model::scroll_offset(cursor_display, height);
    let label_width = (areas.list.width as usize).saturating_sub(2);

    let mut lines = Vec::with_capacity(height);
    for (offset, row) in rows.iter().skip(scroll).take(height).enumerate() {
        let display_index = scroll + offset;
        let line = match row {
            DisplayRow::GroupHeader(label) => Line::from(Span::styled(
                format!("▾ {}", fit_label(label, label_width)),
                Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
            )),
            DisplayRow::NoResults => Line::from(Span::styled(
                texts.panes.no_results,
                Style::default().fg(c.warning),
            )),
            DisplayRow::Option(option) => {
                let staged = app.selector.is_visually_selected(pane, option.id);
                let is_cursor = focused && display_index == cursor_display;

                let (marker_style, label_style) = if is_cursor {
                    let base = Style::default().fg(c.selected_fg).bg(c.selected_bg);
                    (base, base.add_modifier(Modifier::BOLD))
                } else if staged {
                    (
                        Style::default().fg(c.staged),
                        Style::default().fg(c.staged),
                    )
                } else {
                    (Style::default().fg(c.fg), Style::default().fg(c.fg))
                };

                let marker = if staged { "◆ " } else { "  " };
                Line::from(vec![
                    Span::styled(marker, marker_style),
                    Span::styled(fit_label(&option.label, label_width), label_style),
                ])
            }
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), areas.list);
}

/// 按显示宽度截断标签，超出时以省略号结尾
fn fit_label(label: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(label) <= max_width {
        return label.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in label.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

//! 主布局渲染
//!
//! `compute` 是纯函数：Event 层用同一套区域划分来做鼠标命中
//! 测试，渲染和命中必须永远一致。

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use picklist_core::Pane;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::colors;

/// 一个面板占用的区域
#[derive(Debug, Clone, Copy)]
pub struct PaneAreas {
    /// 含边框的整块区域
    pub block: Rect,
    /// 边框内第一行：过滤输入行
    pub filter: Rect,
    /// 过滤行以下的列表区域
    pub list: Rect,
}

/// 整个画面的区域划分
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    pub title: Rect,
    pub available: PaneAreas,
    pub selected: PaneAreas,
    pub status: Rect,
}

/// 计算区域划分
pub fn compute(size: Rect) -> Areas {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    // 左右两个面板
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[1]);

    Areas {
        title: main_layout[0],
        available: pane_areas(columns[0]),
        selected: pane_areas(columns[1]),
        status: main_layout[2],
    }
}

/// 一个面板内部的区域划分（边框 1 格 + 过滤行 1 行）
fn pane_areas(column: Rect) -> PaneAreas {
    let inner = Rect {
        x: column.x.saturating_add(1),
        y: column.y.saturating_add(1),
        width: column.width.saturating_sub(2),
        height: column.height.saturating_sub(2),
    };
    let filter = Rect {
        height: inner.height.min(1),
        ..inner
    };
    let list = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    };
    PaneAreas {
        block: column,
        filter,
        list,
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let areas = compute(frame.area());

    // 渲染标题栏
    render_title_bar(frame, areas.title);

    // 渲染左右两个面板
    components::panes::render(app, frame, Pane::Available, &areas.available);
    components::panes::render(app, frame, Pane::Selected, &areas.selected);

    // 渲染状态栏
    components::statusbar::render(app, frame, areas.status);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();
    let title = Paragraph::new(format!(" {} v0.1.0", texts.common.app_name))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let help = &texts.help;

    let rows: Vec<(&str, &str)> = vec![
        ("↑↓ / jk", help.nav),
        ("Home/End", help.jump),
        ("Space", help.stage),
        ("Ctrl+Click", help.additive),
        ("Shift+Click", help.range),
        ("Enter", help.move_staged),
        ("m", help.move_one),
        ("Alt+m", help.move_all),
        ("a", help.select_all),
        ("c / Esc", help.clear_all),
        ("/", help.filter),
        ("Tab / ←→", help.switch_panel),
        ("Alt+s", help.export),
        ("Alt+t", help.theme),
        ("Alt+l", help.language),
        ("Alt+p", help.touch),
        ("q", help.quit),
    ];

    let height = rows.len() as u16 + 4;
    let area = centered_rect(46, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for (key, desc) in rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<12}"),
                Style::default()
                    .fg(c.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(c.fg)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let c = colors();
    let area = centered_rect(56, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(c.fg))),
        Line::from(""),
        Line::from(Span::styled(
            texts.modal.close_hint,
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

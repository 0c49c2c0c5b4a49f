//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use picklist_core::{Modifiers, Pane, SelectorKey};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage, PickerMessage, SearchMessage, SettingsMessage};
use crate::model::{self, App};
use crate::view::layout;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app), // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

// ========== 键盘 ==========

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 过滤输入模式下，按键先喂给查询编辑
    if app.search.editing {
        return handle_search_keys(key);
    }

    // 全局快捷键（无论焦点在哪个面板）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Open);
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // ← →: 直接聚焦左/右面板
    if DefaultKeymap::FOCUS_AVAILABLE.matches(&key) {
        return AppMessage::FocusPane(Pane::Available);
    }
    if DefaultKeymap::FOCUS_SELECTED.matches(&key) {
        return AppMessage::FocusPane(Pane::Selected);
    }

    // 设置
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::Settings(SettingsMessage::ToggleTheme);
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::Settings(SettingsMessage::ToggleLanguage);
    }
    if DefaultKeymap::TOUCH_INPUT.matches(&key) {
        return AppMessage::Settings(SettingsMessage::ToggleTouchInput);
    }

    // 批量移动与导出
    if DefaultKeymap::MOVE_ALL.matches(&key) {
        return AppMessage::Picker(PickerMessage::MoveAll);
    }
    if DefaultKeymap::EXPORT.matches(&key) {
        return AppMessage::Picker(PickerMessage::Export);
    }

    handle_list_keys(key)
}

/// 处理聚焦面板上的列表按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    // m: 把光标行移到对面
    if DefaultKeymap::MOVE_ONE.matches(&key) {
        return AppMessage::Picker(PickerMessage::MoveOne);
    }
    // a: 暂存当前可见的全部行
    if DefaultKeymap::SELECT_ALL.matches(&key) {
        return AppMessage::Picker(PickerMessage::SelectAll);
    }
    // c 或 Esc: 清空暂存
    if DefaultKeymap::CLEAR_ALL.matches(&key) || DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Picker(PickerMessage::ClearAll);
    }

    match key.code {
        // ↑ 或 k: 光标上移（到顶回绕）
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Picker(PickerMessage::Key(SelectorKey::Up))
        }
        // ↓ 或 j: 光标下移（到底回绕）
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Picker(PickerMessage::Key(SelectorKey::Down))
        }
        // Home: 跳到第一行
        KeyCode::Home => AppMessage::Picker(PickerMessage::Key(SelectorKey::Home)),
        // End: 跳到最后一行
        KeyCode::End => AppMessage::Picker(PickerMessage::Key(SelectorKey::End)),
        // 空格: 切换光标行的暂存（始终为切换，不分指针类型）
        KeyCode::Char(' ') => AppMessage::Picker(PickerMessage::Key(SelectorKey::Space)),
        // Enter: 把暂存行移到对面
        KeyCode::Enter => AppMessage::Picker(PickerMessage::Key(SelectorKey::Enter)),
        _ => AppMessage::Noop,
    }
}

/// 过滤输入模式下的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Esc: 清空过滤并退出
        KeyCode::Esc => AppMessage::Search(SearchMessage::Cancel),
        // Enter: 保留过滤并退出
        KeyCode::Enter => AppMessage::Search(SearchMessage::Accept),
        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        // 普通字符输入
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::ALT)
                && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            AppMessage::Search(SearchMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => AppMessage::Modal(ModalMessage::Close),
        (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

// ========== 鼠标 ==========

/// 处理鼠标事件
///
/// 命中测试必须和 View 层用同一套展示行投影与滚动计算
/// （model::display_rows / scroll_offset），否则点到的行会错位。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if app.modal.is_open() {
        return AppMessage::Noop;
    }

    let areas = layout::compute(app.viewport);
    let position = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        // 左键按下: 点击选项行即切换其暂存状态
        MouseEventKind::Down(MouseButton::Left) => {
            for (pane, pane_areas) in [
                (Pane::Available, &areas.available),
                (Pane::Selected, &areas.selected),
            ] {
                if pane_areas.list.contains(position) {
                    if let Some(id) = option_under_cursor(app, pane, pane_areas.list, mouse.row) {
                        let modifiers = Modifiers {
                            ctrl: mouse.modifiers.contains(KeyModifiers::CONTROL),
                            shift: mouse.modifiers.contains(KeyModifiers::SHIFT),
                        };
                        return AppMessage::Picker(PickerMessage::ToggleVisual {
                            pane,
                            id,
                            modifiers,
                        });
                    }
                    // 点在标题行或空白处: 只聚焦面板
                    return AppMessage::FocusPane(pane);
                }
                if pane_areas.block.contains(position) {
                    return AppMessage::FocusPane(pane);
                }
            }
            AppMessage::Noop
        }

        // 滚轮: 移动悬停面板的光标
        MouseEventKind::ScrollUp => hovered_pane(&areas, position).map_or(AppMessage::Noop, |pane| {
            AppMessage::Picker(PickerMessage::CursorMove {
                pane,
                key: SelectorKey::Up,
            })
        }),
        MouseEventKind::ScrollDown => {
            hovered_pane(&areas, position).map_or(AppMessage::Noop, |pane| {
                AppMessage::Picker(PickerMessage::CursorMove {
                    pane,
                    key: SelectorKey::Down,
                })
            })
        }

        _ => AppMessage::Noop,
    }
}

/// 鼠标下方的面板
fn hovered_pane(areas: &layout::Areas, position: Position) -> Option<Pane> {
    if areas.available.block.contains(position) {
        Some(Pane::Available)
    } else if areas.selected.block.contains(position) {
        Some(Pane::Selected)
    } else {
        None
    }
}

/// 点击坐标对应的选项 id
fn option_under_cursor(app: &App, pane: Pane, list_area: Rect, row: u16) -> Option<u64> {
    let view = app.selector.view(pane);
    let rows = model::display_rows(view);
    let cursor_display = model::display_cursor(&rows, app.selector.cursor(pane));
    let scroll = model::scroll_offset(cursor_display, list_area.height as usize);

    let display_index = (row.saturating_sub(list_area.y)) as usize + scroll;
    model::option_at(&rows, display_index)
}

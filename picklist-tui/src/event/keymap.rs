//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));

    // 面板切换
    pub const FOCUS_AVAILABLE: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_SELECTED: KeyBinding = KeyBinding::key(KeyCode::Right);

    // 暂存与移动
    pub const MOVE_ONE: KeyBinding = KeyBinding::key(KeyCode::Char('m'));
    pub const SELECT_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const CLEAR_ALL: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
    pub const MOVE_ALL: KeyBinding = KeyBinding::alt(KeyCode::Char('m'));

    // 导出与设置
    pub const EXPORT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const TOUCH_INPUT: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));

    // 返回 / 清除
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
}

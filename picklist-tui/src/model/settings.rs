//! 设置状态

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 设置状态
///
/// `touch_input` 是注入选择器的指针能力的来源：
/// 开启后普通点击为累加选择（触摸语义），关闭后为独占选择。
#[derive(Debug, Clone, Copy)]
pub struct SettingsState {
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
    /// 触摸输入模式（粗指针，无悬停）
    pub touch_input: bool,
}

impl SettingsState {
    /// 创建默认设置
    pub fn new() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::default(),
            touch_input: false,
        }
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

//! 设置消息

/// 设置消息
#[derive(Debug, Clone)]
pub enum SettingsMessage {
    /// 切换主题（深色 / 浅色）
    ToggleTheme,
    /// 切换语言
    ToggleLanguage,
    /// 切换触摸输入模式（实时更新指针能力）
    ToggleTouchInput,
}

//! 应用主消息枚举

use picklist_core::Pane;

use super::{ModalMessage, PickerMessage, SearchMessage, SettingsMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 聚焦指定面板
    FocusPane(Pane),

    /// 选择器相关消息
    Picker(PickerMessage),

    /// 过滤输入相关消息
    Search(SearchMessage),

    /// 设置相关消息
    Settings(SettingsMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

//! 弹窗/对话框状态

/// 弹窗枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
#[derive(Debug, Clone)]
pub enum Modal {
    /// 快捷键帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗, Some = 有弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建空弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }
}

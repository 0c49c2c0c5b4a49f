//! 过滤输入消息

/// 过滤输入消息
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// 开始编辑聚焦面板的过滤条件
    Open,
    /// 输入字符
    Input(char),
    /// 删除末尾字符
    Backspace,
    /// 清空过滤并退出输入模式
    Cancel,
    /// 保留过滤并退出输入模式
    Accept,
}

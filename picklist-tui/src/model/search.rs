//! 过滤输入状态

/// 过滤输入状态
///
/// 查询文本本身保存在选择器里（每个面板一个）；
/// 这里只记录当前是否处于输入模式。
#[derive(Debug, Default)]
pub struct SearchState {
    /// 是否正在编辑聚焦面板的过滤条件
    pub editing: bool,
}

impl SearchState {
    /// 创建默认过滤输入状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 进入输入模式
    pub fn open(&mut self) {
        self.editing = true;
    }

    /// 离开输入模式
    pub fn close(&mut self) {
        self.editing = false;
    }
}

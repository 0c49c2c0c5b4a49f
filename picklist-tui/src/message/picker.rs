//! 选择器操作消息
//!
//! 携带指针/键盘意图；真正的语义（独占 vs 累加、范围、锚点）
//! 全部由 picklist-core 决定。

use picklist_core::{Modifiers, Pane, SelectorKey};

/// 选择器操作消息
#[derive(Debug, Clone)]
pub enum PickerMessage {
    // ========== 键盘契约 ==========
    /// 聚焦面板上的一次导航按键（↑↓ Home End 空格 回车）
    Key(SelectorKey),

    // ========== 指针路径 ==========
    /// 点击某行，携带修饰键状态
    ToggleVisual {
        pane: Pane,
        id: u64,
        modifiers: Modifiers,
    },
    /// 滚轮在某个面板上移动光标
    CursorMove { pane: Pane, key: SelectorKey },

    // ========== 批量暂存 ==========
    /// 暂存聚焦面板当前可见的全部行
    SelectAll,
    /// 清空聚焦面板的暂存
    ClearAll,

    // ========== 移动 ==========
    /// 把聚焦面板暂存的行移到对面
    MoveStaged,
    /// 把光标所在行移到对面
    MoveOne,
    /// 把聚焦面板的全部行移到对面（无视过滤）
    MoveAll,

    // ========== 导出 ==========
    /// 把当前选择写入输出文件
    Export,
}

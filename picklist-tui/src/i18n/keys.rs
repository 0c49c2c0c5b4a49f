//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 面板文本
    pub panes: PaneTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub slash: &'static str,
    pub arrows_ud: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub navigate: &'static str,
    pub stage: &'static str,
    pub move_staged: &'static str,
    pub switch_panel: &'static str,
    pub filter: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub cancel: &'static str,
    pub accept: &'static str,
    pub close: &'static str,
}

/// 键盘提示文本
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

// ============================================================================
// 面板
// ============================================================================

/// 面板文本
pub struct PaneTexts {
    /// 左面板标题
    pub available: &'static str,
    /// 右面板标题
    pub selected: &'static str,
    /// 过滤无结果时的提示
    pub no_results: &'static str,
    /// 过滤行的占位提示
    pub filter_hint: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏消息文本
pub struct StatusTexts {
    /// “已移动 N 行” 的前半段
    pub moved_prefix: &'static str,
    /// “已移动 N 行” 的后半段
    pub moved_suffix: &'static str,
    /// “已导出到 …” 的前半段
    pub exported_prefix: &'static str,
    /// 触摸输入模式开启
    pub touch_on: &'static str,
    /// 触摸输入模式关闭
    pub touch_off: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub load_error_title: &'static str,
    pub export_error_title: &'static str,
    pub close_hint: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub nav: &'static str,
    pub jump: &'static str,
    pub stage: &'static str,
    pub additive: &'static str,
    pub range: &'static str,
    pub move_staged: &'static str,
    pub move_one: &'static str,
    pub move_all: &'static str,
    pub select_all: &'static str,
    pub clear_all: &'static str,
    pub filter: &'static str,
    pub switch_panel: &'static str,
    pub export: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub touch: &'static str,
    pub quit: &'static str,
}

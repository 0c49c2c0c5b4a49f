//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//! 值得一提的是，列表本身的状态（选中集合、视觉选择、锚点、过滤）
//! 并不在这里：它们属于 picklist-core 的 `DualListSelector`，
//! Model 只持有这台状态机，外加宿主相关的状态：
//!
//!     App {
//!         should_quit: bool,              // 退出标志
//!         focus: Pane,                    // 当前聚焦的面板（左/右）
//!         selector: DualListSelector,     // 选择器状态机
//!         pointer_profile: PointerProfile,// 注入选择器的指针能力句柄
//!         search: SearchState,            // 过滤输入态
//!         settings: SettingsState,        // 主题 / 语言 / 触摸输入
//!         modal: ModalState,              // 弹窗状态
//!         status_message: Option<String>, // 状态栏消息（可选）
//!         viewport: Rect,                 // 上一帧的终端大小（鼠标命中测试用）
//!         store: OptionsStore,            // 选项文档读写
//!     }
//!
//! 焦点切换的约定：离开一个面板时，该面板的视觉选择与锚点被清空
//! （切换面板即放弃未完成的暂存）。这条规则由 Update 层执行。
//!

mod app;
mod modal;
mod rows;
mod search;
mod settings;

pub use app::App;
pub use modal::{Modal, ModalState};
pub use rows::{display_cursor, display_rows, option_at, scroll_offset, DisplayRow};
pub use search::SearchState;
pub use settings::SettingsState;

//! View 层：UI 渲染
//!
//! View 层只读取 Model，把状态画成一帧终端画面。
//! 布局计算（layout::compute）被 Event 层复用来做鼠标命中测试，
//! 所以它必须是纯函数。

mod components;
pub mod layout;
pub mod theme;

pub use layout::render;

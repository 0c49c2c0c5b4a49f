//! Event 层：输入处理
//!
//! 把 crossterm 的原始事件（按键、鼠标）翻译成 Message。
//! 这一层只读取状态，不修改状态。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{DefaultKeymap, KeyBinding};

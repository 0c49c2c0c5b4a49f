//! Picklist TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 选项文档读写 (`backend/`)
//!
//! 双列表选择器本身（派生视图、视觉选择、过滤、键盘契约）
//! 完全由 picklist-core 提供；本 crate 只负责把终端事件翻译成
//! 对选择器的操作，并把状态渲染回终端。
//!
//!
//! main.rs
//! Picklist TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     OptionsStore::from_args()   // 解析命令行中的输入/输出路径
//!     load_or_sample()            // 读取选项文档，失败时退回内置示例
//!     init_terminal()             // 初始化终端（raw mode + 备用屏幕 + 鼠标捕获）
//!     model::App::new()           // 创建 APP 实例
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!     打印最终选择到 stdout       // 方便与 shell 管道组合
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::env;

use anyhow::Result;
use picklist_core::SelectionExport;

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 解析参数并加载选项文档
    let args: Vec<String> = env::args().skip(1).collect();
    let store = backend::OptionsStore::from_args(&args);
    let (document, load_error) = store.load_or_sample();

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let mut app = model::App::new(document, store);
    if let Some(message) = load_error {
        app.modal.show_error(i18n::t().modal.load_error_title, message);
    }

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 把最终选择打印到 stdout
    let export = SelectionExport::new(app.selector.selected_in_order());
    if let Ok(json) = serde_json::to_string(&export) {
        println!("{json}");
    }

    result
}

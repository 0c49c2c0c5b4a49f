//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod picker;             // 选择器子消息处理
//!         mod search;             // 过滤输入子消息处理
//!         mod settings;           // 设置子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//! 选择器的每条子消息都只是对 picklist-core 状态机方法的一次
//! 调用；衍生视图的重算和订阅者通知由状态机在方法内部完成，
//! Update 层拿到控制权时状态已经一致。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod modal;
mod picker;
mod search;
mod settings;

use picklist_core::Pane;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                switch_focus(app, app.focus.opposite());
            }
        }

        AppMessage::FocusPane(pane) => {
            if !app.modal.is_open() {
                switch_focus(app, pane);
            }
        }

        AppMessage::Picker(picker_msg) => {
            picker::update(app, picker_msg);
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Settings(settings_msg) => {
            settings::update(app, settings_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 切换聚焦面板
///
/// 离开一个面板时放弃其暂存与锚点：面板切换即视觉选择重置。
pub(crate) fn switch_focus(app: &mut App, target: Pane) {
    if app.focus != target {
        app.selector.clear_all_visual(app.focus);
        app.focus = target;
    }
}

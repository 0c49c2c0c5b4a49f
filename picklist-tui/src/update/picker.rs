//! 选择器更新逻辑
//!
//! 把选择器消息翻译成 picklist-core 状态机的调用，并产出
//! 状态栏反馈。

use picklist_core::{SelectionExport, SelectorKey};

use crate::i18n::t;
use crate::message::PickerMessage;
use crate::model::App;

use super::switch_focus;

/// 处理选择器消息
pub fn update(app: &mut App, msg: PickerMessage) {
    match msg {
        // ========== 键盘契约 ==========
        PickerMessage::Key(key) => {
            // 回车会移动暂存行，先记下数量用于反馈
            let staged = app.selector.visual_count(app.focus);
            app.selector.handle_key(app.focus, key);
            if key == SelectorKey::Enter && staged > 0 {
                set_moved_status(app, staged);
            }
        }

        // ========== 指针路径 ==========
        PickerMessage::ToggleVisual {
            pane,
            id,
            modifiers,
        } => {
            // 点击一个面板同时聚焦它
            switch_focus(app, pane);
            app.selector.toggle_visual(pane, id, modifiers);
        }

        PickerMessage::CursorMove { pane, key } => {
            switch_focus(app, pane);
            app.selector.handle_key(pane, key);
        }

        // ========== 批量暂存 ==========
        PickerMessage::SelectAll => {
            app.selector.select_all_visual(app.focus);
        }

        PickerMessage::ClearAll => {
            app.selector.clear_all_visual(app.focus);
            app.clear_status();
        }

        // ========== 移动 ==========
        PickerMessage::MoveStaged => {
            let staged = app.selector.visual_count(app.focus);
            app.selector.move_staged(app.focus);
            if staged > 0 {
                set_moved_status(app, staged);
            }
        }

        PickerMessage::MoveOne => {
            if let Some(id) = app.selector.cursor_row(app.focus).map(|option| option.id) {
                app.selector.move_one(app.focus, id);
                set_moved_status(app, 1);
            }
        }

        PickerMessage::MoveAll => {
            let total = app.selector.view(app.focus).rows.len();
            app.selector.move_all(app.focus);
            if total > 0 {
                set_moved_status(app, total);
            }
        }

        // ========== 导出 ==========
        PickerMessage::Export => {
            handle_export(app);
        }
    }
}

/// “已移动 N 行” 状态消息
fn set_moved_status(app: &mut App, count: usize) {
    let texts = t();
    app.set_status(format!(
        "{}{}{}",
        texts.status.moved_prefix, count, texts.status.moved_suffix
    ));
}

/// 把当前选择写入输出文件
fn handle_export(app: &mut App) {
    let texts = t();
    let export = SelectionExport::new(app.selector.selected_in_order());

    match app.store.save_selection(&export) {
        Ok(path) => {
            app.set_status(format!(
                "{}{}",
                texts.status.exported_prefix,
                path.display()
            ));
        }
        Err(err) => {
            log::warn!("selection export failed: {err:#}");
            app.modal
                .show_error(texts.modal.export_error_title, format!("{err:#}"));
        }
    }
}

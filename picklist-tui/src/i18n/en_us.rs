//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HelpTexts, HintTexts, KeyNames, ModalTexts, PaneTexts, StatusTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Picklist",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            slash: "/",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            stage: "Stage",
            move_staged: "Move",
            switch_panel: "Switch panel",
            filter: "Filter",
            help: "Help",
            quit: "Quit",
            cancel: "Cancel",
            accept: "Accept",
            close: "Close",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    panes: PaneTexts {
        available: "Available",
        selected: "Selected",
        no_results: "No matching options",
        filter_hint: "filter",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        moved_prefix: "Moved ",
        moved_suffix: " option(s)",
        exported_prefix: "Selection written to ",
        touch_on: "Touch input: plain click adds to the staging",
        touch_off: "Fine pointer: plain click stages exclusively",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        load_error_title: "Could not load options",
        export_error_title: "Export failed",
        close_hint: "Press Enter or Esc to close",
    },

    help: HelpTexts {
        title: "Keyboard & Mouse",
        nav: "Move the cursor (wraps)",
        jump: "Jump to first / last row",
        stage: "Toggle staging of the cursor row",
        additive: "Toggle a row without clearing others",
        range: "Stage the range from the anchor",
        move_staged: "Move staged rows across",
        move_one: "Move the cursor row across",
        move_all: "Move every row across (ignores filter)",
        select_all: "Stage all visible rows",
        clear_all: "Clear the staging",
        filter: "Filter the focused pane",
        switch_panel: "Switch focused pane",
        export: "Write the selection file",
        theme: "Toggle dark / light theme",
        language: "Switch language",
        touch: "Toggle touch input mode",
        quit: "Quit (prints the selection)",
    },
};

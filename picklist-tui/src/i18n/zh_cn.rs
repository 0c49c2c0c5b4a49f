//! 简体中文翻译 (zh-CN)

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
            space: "空格",
            slash: "/",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "移动光标",
            stage: "暂存",
            move_staged: "移动",
            switch_panel: "切换面板",
            filter: "过滤",
            help: "帮助",
            quit: "退出",
            cancel: "取消",
            accept: "确认",
            close: "关闭",
        },
    },

    // ========================================================================
    // 面板
    // ========================================================================
    panes: PaneTexts {
        available: "可选项",
        selected: "已选项",
        no_results: "没有匹配的选项",
        filter_hint: "过滤",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        moved_prefix: "已移动 ",
        moved_suffix: " 项",
        exported_prefix: "选择结果已写入 ",
        touch_on: "触摸输入：普通点击累加暂存",
        touch_off: "精确指针：普通点击独占暂存",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        load_error_title: "选项文档加载失败",
        export_error_title: "导出失败",
        close_hint: "按 Enter 或 Esc 关闭",
    },

    help: HelpTexts {
        title: "键盘与鼠标",
        nav: "移动光标（首尾回绕）",
        jump: "跳到第一行 / 最后一行",
        stage: "切换光标行的暂存状态",
        additive: "切换一行，不清除其它暂存",
        range: "从锚点暂存到当前行",
        move_staged: "把暂存行移到对面",
        move_one: "把光标行移到对面",
        move_all: "把整个面板移到对面（无视过滤）",
        select_all: "暂存当前可见的全部行",
        clear_all: "清空暂存",
        filter: "过滤聚焦面板",
        switch_panel: "切换聚焦面板",
        export: "写出选择结果文件",
        theme: "切换深色 / 浅色主题",
        language: "切换语言",
        touch: "切换触摸输入模式",
        quit: "退出（打印选择结果）",
    },
};

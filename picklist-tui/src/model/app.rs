//! 应用主状态结构

use ratatui::layout::Rect;

use picklist_core::{
    DualListSelector, OptionsDocument, Pane, PointerProfile, Subscription,
};

use crate::backend::OptionsStore;

use super::{ModalState, SearchState, SettingsState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前聚焦的面板
    pub focus: Pane,

    /// 双列表选择器状态机
    pub selector: DualListSelector,

    /// 指针能力句柄（与选择器共享，Alt+p 实时切换）
    pub pointer_profile: PointerProfile,

    /// 过滤输入状态
    pub search: SearchState,

    /// 设置状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 上一帧的终端大小
    pub viewport: Rect,

    /// 选项文档读写
    pub store: OptionsStore,

    /// 选择器变更的跟踪订阅（guard 掉落即注销监听）
    _selector_watch: Subscription,
}

impl App {
    /// 创建新的应用实例
    pub fn new(document: OptionsDocument, store: OptionsStore) -> Self {
        let settings = SettingsState::new();
        let pointer_profile = PointerProfile::new(settings.touch_input);
        let selector = DualListSelector::new(document.into_config(), pointer_profile.clone());

        let selector_watch = selector.subscribe(|change| {
            log::debug!("selector change: {change:?}");
        });

        Self {
            should_quit: false,
            focus: Pane::Available,
            selector,
            pointer_profile,
            search: SearchState::new(),
            settings,
            modal: ModalState::new(),
            status_message: None,
            viewport: Rect::default(),
            store,
            _selector_watch: selector_watch,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

//! 设置更新逻辑

use crate::i18n::{self, t};
use crate::message::SettingsMessage;
use crate::model::App;
use crate::view::theme;

/// 处理设置消息
pub fn update(app: &mut App, msg: SettingsMessage) {
    match msg {
        SettingsMessage::ToggleTheme => {
            app.settings.theme = app.settings.theme.next();
            theme::set_theme_index(app.settings.theme.index());
        }

        SettingsMessage::ToggleLanguage => {
            let language = i18n::current_language().next();
            i18n::set_language(language);
            app.settings.language = language;
            app.set_status(language.display_name());
        }

        SettingsMessage::ToggleTouchInput => {
            // 实时更新注入选择器的指针能力：
            // 下一次普通点击立即采用新的独占/累加语义
            let coarse = app.pointer_profile.toggle();
            app.settings.touch_input = coarse;

            let texts = t();
            app.set_status(if coarse {
                texts.status.touch_on
            } else {
                texts.status.touch_off
            });
        }
    }
}

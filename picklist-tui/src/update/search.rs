//! 过滤输入更新逻辑
//!
//! 每次按键都把聚焦面板的查询同步进选择器，过滤结果随输入
//! 逐键收窄。

use crate::message::SearchMessage;
use crate::model::App;

/// 处理过滤输入消息
pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Open => {
            app.search.open();
        }

        SearchMessage::Input(ch) => {
            let mut query = app.selector.query(app.focus).to_string();
            query.push(ch);
            app.selector.set_query(app.focus, query);
        }

        SearchMessage::Backspace => {
            let mut query = app.selector.query(app.focus).to_string();
            query.pop();
            app.selector.set_query(app.focus, query);
        }

        SearchMessage::Cancel => {
            app.selector.clear_query(app.focus);
            app.search.close();
        }

        SearchMessage::Accept => {
            app.search.close();
        }
    }
}

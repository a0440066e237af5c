//! 内容面板更新逻辑
//!
//! 列表页的选择/翻页/过滤与 Pokedex 页的查询输入。
//! 需要网络抓取的操作返回对应的 Command。

use crate::message::{Command, ContentMessage};
use crate::model::{App, FocusPanel, Route};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            app.pokemon_list.select_previous();
            None
        }
        ContentMessage::SelectNext => {
            app.pokemon_list.select_next();
            None
        }
        ContentMessage::SelectFirst => {
            app.pokemon_list.select_first();
            None
        }
        ContentMessage::SelectLast => {
            app.pokemon_list.select_last();
            None
        }
        ContentMessage::Confirm => activate_selected(app),

        // ========== 翻页 ==========
        ContentMessage::PrevPage => {
            // 已在第 0 页时静默 no-op，不向负 offset 发请求
            let target = app.pokemon_list.page_previous()?;
            app.set_status("Loading...");
            Some(Command::FetchPage(target))
        }
        ContentMessage::NextPage => {
            let target = app.pokemon_list.page_next();
            app.set_status("Loading...");
            Some(Command::FetchPage(target))
        }

        // ========== 列表本地过滤（不触发网络） ==========
        ContentMessage::FilterStart => {
            app.pokemon_list.filtering = true;
            None
        }
        ContentMessage::FilterInput(ch) => {
            app.pokemon_list.push_filter(ch);
            None
        }
        ContentMessage::FilterBackspace => {
            app.pokemon_list.pop_filter();
            None
        }
        ContentMessage::FilterEnd => {
            app.pokemon_list.filtering = false;
            None
        }

        // ========== Pokedex 查询输入 ==========
        ContentMessage::Input(ch) => {
            app.pokedex.push_char(ch);
            None
        }
        ContentMessage::Backspace => {
            app.pokedex.pop_char();
            None
        }
        ContentMessage::Submit => {
            // 查询为空时 no-op；否则清空输入框并安排抓取
            let query = app.pokedex.take_query()?;
            app.set_status("Loading...");
            Some(Command::FetchPokemon(query))
        }
    }
}

/// 激活列表中高亮的条目：
/// 跳回 Pokedex 路由、聚焦输入框、重置侧边栏序号，
/// 并在抓取解决之前就安排好详情抓取（绕过输入框）
fn activate_selected(app: &mut App) -> Option<Command> {
    let name = app.pokemon_list.selected_summary()?.name.clone();

    app.focus = FocusPanel::SearchInput;
    app.current_route = Route::Pokedex;
    app.sidebar.select_route(Route::Pokedex);
    app.set_status("Loading...");

    Some(Command::FetchPokemon(name))
}

//! 抓取结果合并
//!
//! 唯一检查抓取结果标签的地方：成功载荷送入所属面板，
//! 失败的错误文本送入 Pokedex 页正文。
//! 合并不看当前焦点 —— 侧边栏聚焦时到达的页结果
//! 照样静默更新列表面板。

use crate::message::{Command, FetchMessage};
use crate::model::App;

/// 合并一条抓取结果
pub fn update(app: &mut App, msg: FetchMessage) -> Option<Command> {
    match msg {
        FetchMessage::PokemonLoaded(pokemon) => {
            app.pokedex.show_pokemon(&pokemon);
        }

        FetchMessage::PageLoaded(page) => {
            app.pokemon_list.on_page_loaded(page);
        }

        FetchMessage::FetchFailed(err) => {
            log::warn!("fetch failed: {err}");
            app.pokedex.show_error(&err);
        }
    }

    app.clear_status();
    None
}

//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model。
//! 是唯一可以修改 Model 的地方。
//!
//! 与纯粹的 "修改状态" 不同，有些消息还需要安排网络抓取：
//! 这时 update 返回 `Some(Command)`，由主循环 spawn 执行。
//! Update 层自身从不做 IO，也从不阻塞。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 侧边栏子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod fetch;              // 抓取结果合并
//!

mod content;
mod fetch;
mod navigation;

use crate::message::{AppMessage, Command};
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态，返回需要执行的副作用
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusSidebar => {
            // 交出焦点的面板不需要显式 blur：
            // 焦点是协调器持有的单一枚举，改写即生效
            app.focus = FocusPanel::Sidebar;
            None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Fetch(fetch_msg) => fetch::update(app, fetch_msg),

        AppMessage::Resize(width, height) => {
            app.width = width;
            app.height = height;
            None
        }

        AppMessage::Noop => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FetchError;
    use crate::message::{ContentMessage, FetchMessage, NavigationMessage};
    use crate::model::domain::{Pokemon, PokemonPage, PokemonSummary};
    use crate::model::{FocusPanel, Route};

    fn page(page_index: usize, count: u64, names: &[&str]) -> PokemonPage {
        PokemonPage {
            page: page_index,
            count,
            entries: names
                .iter()
                .map(|name| PokemonSummary {
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    /// 场景 A：首页抓取结果整体替换列表内容
    #[test]
    fn initial_page_load_replaces_list() {
        let mut app = App::new();

        let cmd = update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PageLoaded(page(
                0,
                1302,
                &["bulbasaur", "ivysaur"],
            ))),
        );

        assert_eq!(cmd, None);
        assert_eq!(app.pokemon_list.page, 0);
        let names: Vec<&str> = app
            .pokemon_list
            .entries
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    }

    /// 场景 B：提交查询清空输入框并安排抓取；
    /// 详情到达后正文渲染为固定五行格式
    #[test]
    fn submit_schedules_fetch_and_renders_detail() {
        let mut app = App::new();
        for ch in "Pikachu".chars() {
            update(&mut app, AppMessage::Content(ContentMessage::Input(ch)));
        }

        let cmd = update(&mut app, AppMessage::Content(ContentMessage::Submit));
        // 小写归一化发生在客户端，命令携带原始查询
        assert_eq!(cmd, Some(Command::FetchPokemon("Pikachu".to_string())));
        assert!(app.pokedex.input.is_empty());

        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PokemonLoaded(Pokemon {
                name: "pikachu".to_string(),
                height: 4,
                weight: 60,
                types: vec!["electric".to_string()],
                abilities: vec!["static".to_string()],
            })),
        );

        assert_eq!(
            app.pokedex.body,
            "Name: pikachu\nHeight: 4\nWeight: 60\nTypes: electric\nAbilities: static"
        );
    }

    /// 场景 C：404 的错误文本原样进入正文
    #[test]
    fn not_found_renders_literal_message() {
        let mut app = App::new();

        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::FetchFailed(FetchError::NotFound)),
        );

        assert_eq!(app.pokedex.body, "pokemon not found");
    }

    /// 场景 D：列表激活在抓取解决之前就完成
    /// 焦点/路由/侧边栏序号三件套的迁移
    #[test]
    fn list_activation_transitions_before_fetch_resolves() {
        let mut app = App::new();

        // 侧边栏聚焦在列表目的地上，Enter 激活
        update(&mut app, AppMessage::FocusSidebar);
        update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::SelectNext),
        );
        let cmd = update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.focus, FocusPanel::List);
        assert_eq!(app.current_route, Route::PokemonList);
        // 进入列表路由会重新抓取当前页
        assert_eq!(cmd, Some(Command::FetchPage(0)));

        // 列表里高亮 charmander，Enter 激活
        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PageLoaded(page(
                0,
                1302,
                &["bulbasaur", "charmander"],
            ))),
        );
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));

        let cmd = update(&mut app, AppMessage::Content(ContentMessage::Confirm));
        assert_eq!(cmd, Some(Command::FetchPokemon("charmander".to_string())));
        assert_eq!(app.focus, FocusPanel::SearchInput);
        assert_eq!(app.current_route, Route::Pokedex);
        assert_eq!(app.sidebar.active_route(), Route::Pokedex);
    }

    /// 空查询提交：无命令，正文不变
    #[test]
    fn empty_submit_is_noop() {
        let mut app = App::new();
        let body_before = app.pokedex.body.clone();

        let cmd = update(&mut app, AppMessage::Content(ContentMessage::Submit));

        assert_eq!(cmd, None);
        assert_eq!(app.pokedex.body, body_before);
    }

    /// 第 0 页向前翻页：页号不动，不安排抓取
    #[test]
    fn prev_page_at_zero_schedules_nothing() {
        let mut app = App::new();
        app.focus = FocusPanel::List;
        app.current_route = Route::PokemonList;

        let cmd = update(&mut app, AppMessage::Content(ContentMessage::PrevPage));

        assert_eq!(cmd, None);
        assert_eq!(app.pokemon_list.page, 0);
    }

    /// 翻页立即移动页号并安排对应页的抓取；
    /// 旧页内容在抓取完成前保持可见
    #[test]
    fn next_page_schedules_fetch_keeps_stale_entries() {
        let mut app = App::new();
        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PageLoaded(page(0, 1302, &["bulbasaur"]))),
        );

        let cmd = update(&mut app, AppMessage::Content(ContentMessage::NextPage));

        assert_eq!(cmd, Some(Command::FetchPage(1)));
        assert_eq!(app.pokemon_list.page, 1);
        assert_eq!(app.pokemon_list.entries.len(), 1); // 旧页未被清空
    }

    /// 抓取结果在任何焦点下都合并进所属面板（静默后台更新）
    #[test]
    fn page_result_merges_regardless_of_focus() {
        let mut app = App::new();
        app.focus = FocusPanel::Sidebar;

        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PageLoaded(page(2, 1302, &["pidgey"]))),
        );

        assert_eq!(app.focus, FocusPanel::Sidebar); // 焦点不受影响
        assert_eq!(app.pokemon_list.page, 2);
        assert_eq!(app.pokemon_list.entries.len(), 1);
    }

    /// 后到的结果覆盖先到的（最后写入者生效，无代数检查）
    #[test]
    fn last_writer_wins_on_superseded_fetch() {
        let mut app = App::new();

        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PageLoaded(page(1, 1302, &["metapod"]))),
        );
        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PageLoaded(page(2, 1302, &["pidgey"]))),
        );

        assert_eq!(app.pokemon_list.page, 2);
        assert_eq!(app.pokemon_list.entries[0].name, "pidgey");
    }

    /// 路由一个按键消息至多改动一个面板的业务状态，
    /// 外加焦点/活动路由对 —— 不跨面板泄漏
    #[test]
    fn key_routing_does_not_leak_across_panels() {
        let mut app = App::new();
        update(
            &mut app,
            AppMessage::Fetch(FetchMessage::PageLoaded(page(0, 2, &["bulbasaur"]))),
        );
        let body_before = app.pokedex.body.clone();
        let sidebar_before = app.sidebar.selected;

        // 检索页输入只动 Pokedex 状态
        update(&mut app, AppMessage::Content(ContentMessage::Input('a')));
        assert_eq!(app.pokemon_list.selected, 0);
        assert_eq!(app.sidebar.selected, sidebar_before);

        // 列表选择只动列表状态
        app.focus = FocusPanel::List;
        app.current_route = Route::PokemonList;
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext));
        assert_eq!(app.pokedex.body, body_before);
        assert_eq!(app.sidebar.selected, sidebar_before);
    }

    /// 侧边栏激活占位路由：切换路由但焦点留在侧边栏
    #[test]
    fn placeholder_activation_keeps_sidebar_focus() {
        let mut app = App::new();
        update(&mut app, AppMessage::FocusSidebar);
        app.sidebar.select_route(Route::Moves);

        let cmd = update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));

        assert_eq!(cmd, None);
        assert_eq!(app.current_route, Route::Moves);
        assert_eq!(app.focus, FocusPanel::Sidebar);
    }
}

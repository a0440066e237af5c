//! 侧边栏更新逻辑

use crate::message::{Command, NavigationMessage};
use crate::model::{App, FocusPanel, Route};

/// 处理侧边栏消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.sidebar.select_previous();
            None
        }

        NavigationMessage::SelectNext => {
            app.sidebar.select_next();
            None
        }

        NavigationMessage::Confirm => activate(app, app.sidebar.active_route()),
    }
}

/// 激活一个目的地：切换路由并按路由迁移焦点
fn activate(app: &mut App, route: Route) -> Option<Command> {
    app.current_route = route;
    app.clear_status();

    match route {
        Route::Pokedex => {
            app.focus = FocusPanel::SearchInput;
            None
        }
        Route::PokemonList => {
            app.focus = FocusPanel::List;
            // 视图切换重新抓取当前页（无缓存）
            app.set_status("Loading...");
            Some(Command::FetchPage(app.pokemon_list.page))
        }
        // 占位路由：只切换显示，焦点留在侧边栏
        _ => None,
    }
}

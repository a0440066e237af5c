//! 侧边栏状态定义

use super::Route;

/// 侧边栏条目
#[derive(Debug, Clone)]
pub struct SidebarItem {
    pub route: Route,
    pub label: &'static str,
}

/// 侧边栏状态
pub struct SidebarState {
    /// 目的地列表（静态）
    pub items: Vec<SidebarItem>,
    /// 当前选中的索引（始终在界内）
    pub selected: usize,
}

impl SidebarState {
    /// 创建默认侧边栏状态
    pub fn new() -> Self {
        Self {
            items: vec![
                SidebarItem {
                    route: Route::Pokedex,
                    label: "Pokedex",
                },
                SidebarItem {
                    route: Route::PokemonList,
                    label: "Pokemon List",
                },
                SidebarItem {
                    route: Route::Moves,
                    label: "Moves",
                },
                SidebarItem {
                    route: Route::Abilities,
                    label: "Abilities",
                },
                SidebarItem {
                    route: Route::Items,
                    label: "Items",
                },
                SidebarItem {
                    route: Route::Locations,
                    label: "Locations",
                },
                SidebarItem {
                    route: Route::TypeChart,
                    label: "Type Chart",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项（到顶后环绕到最后一项）
    pub fn select_previous(&mut self) {
        let len = self.items.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// 选择下一项（到底后环绕到第一项）
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// 获取当前选中的目的地
    pub fn active_route(&self) -> Route {
        self.items[self.selected].route
    }

    /// 把选中项重置到指定路由的序号
    pub fn select_route(&mut self, route: Route) {
        if let Some(pos) = self.items.iter().position(|item| item.route == route) {
            self.selected = pos;
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_previous_wraps_to_last() {
        let mut sidebar = SidebarState::new();
        assert_eq!(sidebar.selected, 0);

        sidebar.select_previous();
        assert_eq!(sidebar.selected, sidebar.items.len() - 1);
    }

    #[test]
    fn select_next_wraps_to_first() {
        let mut sidebar = SidebarState::new();
        sidebar.selected = sidebar.items.len() - 1;

        sidebar.select_next();
        assert_eq!(sidebar.selected, 0);
    }

    #[test]
    fn n_downs_return_to_start() {
        let mut sidebar = SidebarState::new();
        sidebar.selected = 2;

        for _ in 0..sidebar.items.len() {
            sidebar.select_next();
        }
        assert_eq!(sidebar.selected, 2);
    }

    #[test]
    fn select_route_moves_ordinal() {
        let mut sidebar = SidebarState::new();
        sidebar.selected = 4;

        sidebar.select_route(Route::Pokedex);
        assert_eq!(sidebar.selected, 0);
        assert_eq!(sidebar.active_route(), Route::Pokedex);
    }
}

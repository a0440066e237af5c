//! 应用主状态结构

use super::{FocusPanel, PokedexState, PokemonListState, Route, SidebarState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 侧边栏状态
    pub sidebar: SidebarState,

    /// 当前路由
    pub current_route: Route,

    /// 终端视口尺寸（仅供展示层参考）
    pub width: u16,
    pub height: u16,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// Pokedex 检索/详情页状态
    pub pokedex: PokedexState,
    /// Pokemon 列表页状态
    pub pokemon_list: PokemonListState,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 初始焦点在搜索输入框，初始路由为 Pokedex。
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::SearchInput,
            sidebar: SidebarState::new(),
            current_route: Route::Pokedex,
            width: 0,
            height: 0,
            status_message: None,
            pokedex: PokedexState::new(),
            pokemon_list: PokemonListState::new(),
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

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! 路由（目的地）定义

/// 侧边栏可选目的地
///
/// 目的地列表在进程生命周期内是静态的。
/// 目前只有 Pokedex（检索/详情）与 PokemonList（分页列表）两个
/// 已接通的路由，其余目的地渲染占位页面。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Pokedex 检索/详情页
    #[default]
    Pokedex,
    /// Pokemon 分页列表
    PokemonList,
    /// 招式（占位）
    Moves,
    /// 特性（占位）
    Abilities,
    /// 道具（占位）
    Items,
    /// 地点（占位）
    Locations,
    /// 属性相性表（占位）
    TypeChart,
}

impl Route {
    /// 获取路由标题
    pub fn title(&self) -> &'static str {
        match self {
            Route::Pokedex => "Pokedex",
            Route::PokemonList => "Pokemon List",
            Route::Moves => "Moves",
            Route::Abilities => "Abilities",
            Route::Items => "Items",
            Route::Locations => "Locations",
            Route::TypeChart => "Type Chart",
        }
    }
}

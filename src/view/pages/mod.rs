//! 各路由的页面视图

pub mod placeholder;
pub mod pokedex;
pub mod pokemon_list;

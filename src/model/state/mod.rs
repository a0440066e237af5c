//! 页面数据状态
//!
//! 每个已接通的路由对应一个状态容器。

mod pokedex;
mod pokemon_list;

pub use pokedex::PokedexState;
pub use pokemon_list::PokemonListState;

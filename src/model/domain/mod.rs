//! 领域模型
//!
//! 从 PokeAPI 响应归一化而来的纯数据结构。
//! 每次成功抓取都整体替换旧值，不做增量合并。

mod pokemon;

pub use pokemon::{Pokemon, PokemonPage, PokemonSummary};

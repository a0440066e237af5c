//! 副作用命令
//!
//! Update 层本身不做 IO，需要网络抓取时返回一条 `Command`，
//! 由主循环 spawn 到 tokio 运行时执行。

/// 待执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 按名称抓取单只 Pokemon 详情
    FetchPokemon(String),
    /// 抓取指定页号的索引页
    FetchPage(usize),
}

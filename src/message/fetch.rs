//! 异步抓取结果消息

use crate::backend::FetchError;
use crate::model::domain::{Pokemon, PokemonPage};

/// 抓取结果消息
///
/// 由 spawn 出去的抓取任务发回主循环，按到达顺序逐条合并。
#[derive(Debug, Clone)]
pub enum FetchMessage {
    /// 详情抓取成功
    PokemonLoaded(Pokemon),
    /// 分页抓取成功
    PageLoaded(PokemonPage),
    /// 抓取失败（单次操作终态，不自动重试）
    FetchFailed(FetchError),
}

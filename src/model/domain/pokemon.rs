//! Pokemon 领域模型

/// 单只 Pokemon 的完整详情
///
/// 由 Backend 层把嵌套的 API 响应压平成扁平的字符串序列。
/// 构造后不可变，由最近一次抓取它的 Pokedex 页独占持有。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// 属性名，保持 API 返回顺序
    pub types: Vec<String>,
    /// 特性名，保持 API 返回顺序
    pub abilities: Vec<String>,
}

/// 列表页中的轻量条目
///
/// 名称既是显示标签，也是列表过滤的键。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonSummary {
    pub name: String,
}

/// 一页抓取结果
///
/// 同一时刻列表页只驻留一页，新页到达时整体取代旧页。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonPage {
    /// 页号（从 0 开始）
    pub page: usize,
    /// 远端报告的条目总数（仅作提示）
    pub count: u64,
    pub entries: Vec<PokemonSummary>,
}

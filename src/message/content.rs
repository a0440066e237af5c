//! 内容面板消息
//!
//! 按当前活动路由分别处理：列表页的选择/翻页/过滤，
//! Pokedex 页的查询输入与提交。

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（激活高亮条目，预加载其详情）
    Confirm,

    // ========== 翻页 ==========
    /// 上一页
    PrevPage,
    /// 下一页
    NextPage,

    // ========== 列表本地过滤 ==========
    /// 开始编辑过滤串
    FilterStart,
    /// 过滤串输入字符
    FilterInput(char),
    /// 过滤串删除字符
    FilterBackspace,
    /// 结束编辑过滤串
    FilterEnd,

    // ========== Pokedex 查询输入 ==========
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 提交查询
    Submit,
}

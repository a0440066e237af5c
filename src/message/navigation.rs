//! 侧边栏相关消息

/// 侧边栏消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 选择上一项（环绕）
    SelectPrevious,
    /// 选择下一项（环绕）
    SelectNext,
    /// 确认选择（激活选中的目的地）
    Confirm,
}

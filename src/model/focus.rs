//! 焦点状态定义

/// 焦点面板枚举
///
/// 三个面板互斥持有键盘输入。初始焦点在搜索输入框
/// （Pokedex 检索页是默认落地页）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧侧边栏
    Sidebar,
    /// Pokemon 列表面板
    List,
    /// Pokedex 检索输入框
    #[default]
    SearchInput,
}

impl FocusPanel {
    /// 是否是侧边栏
    pub fn is_sidebar(&self) -> bool {
        matches!(self, FocusPanel::Sidebar)
    }

    /// 是否是列表面板
    pub fn is_list(&self) -> bool {
        matches!(self, FocusPanel::List)
    }

    /// 是否是搜索输入框
    pub fn is_search_input(&self) -> bool {
        matches!(self, FocusPanel::SearchInput)
    }
}

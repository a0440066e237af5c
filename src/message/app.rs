//! 应用主消息枚举

use super::{ContentMessage, FetchMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 把焦点移交给侧边栏（Tab）
    FocusSidebar,

    /// 侧边栏相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 异步抓取结果
    Fetch(FetchMessage),

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

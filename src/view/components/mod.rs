//! 可复用的 UI 组件

pub mod sidebar;
pub mod statusbar;

//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责把键盘等终端输入事件翻译成 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//! 路由规则（焦点敏感）：
//!     - 全局键（Ctrl+C / Esc 退出、Tab 移交焦点）就地处理；
//!     - 焦点在侧边栏时，按键交给侧边栏处理；
//!     - 否则按 "当前活动路由" 重新推导目标面板 ——
//!       活动路由才是 "哪个面板在线" 的权威来源。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};

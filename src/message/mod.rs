//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达：
//! Event 层把形形色色的终端事件翻译成 Message，
//! Update 层根据 Message 来更新 Model。
//!
//! 异步抓取的结果（页加载完成、详情加载完成、抓取失败）
//! 同样是一等消息（`FetchMessage`），由主循环从通道取出后
//! 走同一条 update 路径合并进对应面板 —— 无论当时焦点在哪里。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息枚举
//!         mod command;        // Update 层要求执行的副作用
//!         mod content;        // 内容面板子消息
//!         mod fetch;          // 异步抓取结果消息
//!         mod navigation;     // 侧边栏子消息
//!

mod app;
mod command;
mod content;
mod fetch;
mod navigation;

pub use app::AppMessage;
pub use command::Command;
pub use content::ContentMessage;
pub use fetch::FetchMessage;
pub use navigation::NavigationMessage;

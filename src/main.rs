//! Pokedex TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: PokeAPI 客户端 (`backend/`)
//!
//!
//! main.rs
//! Pokedex TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     PokeApiClient::new()    // 创建 PokeAPI 客户端（10 秒超时）
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//! 若终端初始化失败（无法进入备用屏幕等），进程以非零状态退出，
//! 并输出原始错误文本。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use backend::{CatalogApi, PokeApiClient};
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 创建 PokeAPI 客户端
    let api: Arc<dyn CatalogApi> = Arc::new(PokeApiClient::new()?);

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let mut app = model::App::new();

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app, api).await;

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 返回结果
    result
}

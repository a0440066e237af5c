//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 先合并已完成的异步抓取结果
//!         update::update(&mut app , msg)                  // （按到达顺序，逐条处理）
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }
//!
//! Update 层返回的 `Command` 描述需要执行的副作用（网络抓取）。
//! `dispatch` 将其 spawn 到 tokio 运行时，完成后把结果作为
//! `FetchMessage` 发回同一条 mpsc 通道 —— 所有状态变更仍然只发生在
//! 主循环线程上。抓取不支持取消：被新请求替代的旧请求照常完成，
//! 其结果按最后写入者生效。

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::backend::CatalogApi;
use crate::event;
use crate::message::{AppMessage, Command, FetchMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub async fn run(terminal: &mut Term, app: &mut App, api: Arc<dyn CatalogApi>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();

    // 启动时无条件抓取第一页
    app.set_status("Loading...");
    dispatch(Command::FetchPage(app.pokemon_list.page), &api, &tx);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 合并已完成的抓取结果（按到达顺序）
        while let Ok(msg) = rx.try_recv() {
            if let Some(cmd) = update::update(app, msg) {
                dispatch(cmd, &api, &tx);
            }
        }

        // 4. 轮询输入事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态，执行副作用
            if let Some(cmd) = update::update(app, msg) {
                dispatch(cmd, &api, &tx);
            }
        }
    }

    Ok(())
}

/// 执行一条 Command：spawn 异步抓取任务，
/// 完成后把结果发回主循环的消息通道
fn dispatch(cmd: Command, api: &Arc<dyn CatalogApi>, tx: &mpsc::UnboundedSender<AppMessage>) {
    let api = Arc::clone(api);
    let tx = tx.clone();

    tokio::spawn(async move {
        let msg = match cmd {
            Command::FetchPokemon(name) => match api.fetch_pokemon(&name).await {
                Ok(pokemon) => FetchMessage::PokemonLoaded(pokemon),
                Err(err) => FetchMessage::FetchFailed(err),
            },
            Command::FetchPage(page) => match api.fetch_page(page).await {
                Ok(page) => FetchMessage::PageLoaded(page),
                Err(err) => FetchMessage::FetchFailed(err),
            },
        };

        // 主循环退出后通道关闭，发送失败可以忽略
        let _ = tx.send(AppMessage::Fetch(msg));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FetchError, FetchResult};
    use crate::model::domain::{Pokemon, PokemonPage, PokemonSummary};
    use async_trait::async_trait;

    /// 测试替身：不走网络，返回预置结果
    struct MockCatalog;

    #[async_trait]
    impl CatalogApi for MockCatalog {
        async fn fetch_pokemon(&self, name: &str) -> FetchResult<Pokemon> {
            if name == "missingno" {
                return Err(FetchError::NotFound);
            }
            Ok(Pokemon {
                name: name.to_string(),
                height: 4,
                weight: 60,
                types: vec!["electric".to_string()],
                abilities: vec!["static".to_string()],
            })
        }

        async fn fetch_page(&self, page: usize) -> FetchResult<PokemonPage> {
            Ok(PokemonPage {
                page,
                count: 1302,
                entries: vec![PokemonSummary {
                    name: "bulbasaur".to_string(),
                }],
            })
        }
    }

    #[tokio::test]
    async fn dispatch_sends_result_back_as_message() {
        let api: Arc<dyn CatalogApi> = Arc::new(MockCatalog);
        let (tx, mut rx) = mpsc::unbounded_channel();

        dispatch(Command::FetchPage(2), &api, &tx);

        match rx.recv().await {
            Some(AppMessage::Fetch(FetchMessage::PageLoaded(page))) => {
                assert_eq!(page.page, 2);
                assert_eq!(page.entries.len(), 1);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn dispatch_maps_failure_to_fetch_failed() {
        let api: Arc<dyn CatalogApi> = Arc::new(MockCatalog);
        let (tx, mut rx) = mpsc::unbounded_channel();

        dispatch(Command::FetchPokemon("missingno".to_string()), &api, &tx);

        match rx.recv().await {
            Some(AppMessage::Fetch(FetchMessage::FetchFailed(err))) => {
                assert_eq!(err, FetchError::NotFound);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    /// 抓取结果按到达顺序逐条合并，不会交错
    #[tokio::test]
    async fn completions_merge_in_arrival_order() {
        let api: Arc<dyn CatalogApi> = Arc::new(MockCatalog);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new();

        dispatch(Command::FetchPage(0), &api, &tx);
        dispatch(Command::FetchPokemon("pikachu".to_string()), &api, &tx);

        for _ in 0..2 {
            let msg = rx.recv().await.expect("message");
            update::update(&mut app, msg);
        }

        assert_eq!(app.pokemon_list.entries.len(), 1);
        assert!(app.pokedex.body.starts_with("Name: pikachu"));
    }
}

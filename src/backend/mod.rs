//!
//! src/backend/mod.rs
//! Backend 层：PokeAPI 客户端
//!
//! Backend 层与 UI 完全解耦，负责全部网络访问。
//! 通过 `CatalogApi` trait 暴露两个只读操作：
//!     - fetch_pokemon(name)   按名称抓取单只 Pokemon 详情
//!     - fetch_page(page)      抓取索引的一页（每页固定 20 条）
//!
//! 传输/状态码结果被映射成一个小的错误分类（`FetchError`）。
//! 每次调用只尝试一次，不做重试 —— 要不要再次调用由上层决定。
//!
//! 数据流：
//!     Update 层返回 Command
//!         ↓
//!     主循环 spawn 抓取任务，调用 CatalogApi
//!         ↓
//!     reqwest 请求 PokeAPI（10 秒超时）
//!         ↓
//!     原始响应 → 归一化领域记录（压平嵌套的 type/ability）
//!         ↓
//!     结果作为 FetchMessage 发回主循环，合并进面板状态
//!

mod error;
mod pokeapi;

pub use error::{FetchError, FetchResult};
pub use pokeapi::{CatalogApi, PokeApiClient};

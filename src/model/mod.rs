//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 这一层只包含纯数据结构，不包含任何 IO。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Sidebar / List / SearchInput）
//!         mod navigation;     // 侧边栏状态
//!         mod route;          // 路由（目的地）枚举
//!
//!         pub mod domain;     // 领域模型（Pokemon、分页数据）
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 route.rs 与 state/ 都和 "页面" 有关，但两者有不同：
//!         - Route 是一个简单的枚举，表示当前应用处于哪个 "页面"，
//!             相当于房间的门牌号，只负责标识位置，不存储任何业务数据；
//!         - State 是各个页面的业务数据容器，存储着列表、选中项、
//!             查询输入等，相当于储存了房间的内容。
//!
//! 焦点（FocusPanel）是协调器持有的单一枚举：
//! 任意时刻恰好有一个面板持有键盘输入，
//! 各面板通过与该枚举比较来得知 "我是否拥有焦点"，
//! 从根源上排除两个面板同时自认为持有焦点的可能。
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
mod route;

pub mod domain;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{SidebarItem, SidebarState};
pub use route::Route;
pub use state::{PokedexState, PokemonListState};

//! View 层：UI 渲染
//!
//! 只读取 Model，从不修改。
//! 布局、配色与边框绘制都在这一层完成，
//! 业务逻辑不计算任何单元格几何。

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;

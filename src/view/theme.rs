//! 主题和样式定义
//!
//! 原程序的多套配色变体收敛为一套实现，
//! 由 ThemeColors 参数化。

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Classic)，相应地，1 为 Mono
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置主题（通过索引值）
#[allow(dead_code)]
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::classic(),
        _ => ThemeColors::mono(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub header: Color,
    pub body: Color,
    pub selected_focused: Color,
    pub selected_unfocused: Color,
    pub unselected_focused: Color,
    pub unselected_unfocused: Color,
    pub muted: Color,
    pub status: Color,
}

impl ThemeColors {
    /// 经典配色（沿用原程序的紫/绿方案）
    pub fn classic() -> Self {
        Self {
            fg: Color::Rgb(0xaa, 0x00, 0xbb),
            border: Color::Rgb(0x3e, 0x3e, 0x3e),
            border_focused: Color::Rgb(0x11, 0xcc, 0x11),
            header: Color::Rgb(0xcc, 0x35, 0x55),
            body: Color::Rgb(0xaf, 0x7f, 0xef),
            selected_focused: Color::Rgb(0xff, 0x00, 0x00),
            selected_unfocused: Color::Rgb(0xcc, 0x35, 0x55),
            unselected_focused: Color::Rgb(0xff, 0x00, 0xff),
            unselected_unfocused: Color::Rgb(0xaa, 0x00, 0xaa),
            muted: Color::Rgb(0x80, 0x80, 0x80),
            status: Color::Yellow,
        }
    }

    /// 单色配色
    pub fn mono() -> Self {
        Self {
            fg: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::White,
            header: Color::White,
            body: Color::Gray,
            selected_focused: Color::White,
            selected_unfocused: Color::Gray,
            unselected_focused: Color::Gray,
            unselected_unfocused: Color::DarkGray,
            muted: Color::DarkGray,
            status: Color::White,
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 标题样式
    pub fn header() -> Style {
        Style::default()
            .fg(colors().header)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }
}

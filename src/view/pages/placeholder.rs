//! 未接通路由的占位页面

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Route;
use crate::view::theme::colors;

/// 渲染占位页面
pub fn render(route: Route, frame: &mut Frame, area: Rect) {
    let c = colors();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", route.title()),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Coming soon",
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

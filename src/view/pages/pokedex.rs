//! Pokedex 检索/详情页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染 Pokedex 页：显示区（标题 + 正文）在上，输入行在下
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 显示区
            Constraint::Length(3), // 输入行
        ])
        .split(area);

    render_display(app, frame, layout[0]);
    render_input(app, frame, layout[1]);
}

/// 渲染显示区
fn render_display(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", app.pokedex.header),
            Styles::header(),
        )),
        Line::from(""),
    ];

    for row in app.pokedex.body.lines() {
        lines.push(Line::from(Span::styled(
            format!(" {row}"),
            Style::default().fg(c.body),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// 渲染输入行
fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_search_input();

    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let content = if app.pokedex.input.is_empty() && !is_focused {
        // 占位提示
        Line::from(Span::styled(
            "Search for a pokemon",
            Style::default().fg(c.muted),
        ))
    } else {
        let mut spans = vec![
            Span::styled("> ", Style::default().fg(c.fg)),
            Span::styled(app.pokedex.input.clone(), Style::default().fg(c.fg)),
        ];
        if is_focused {
            spans.push(Span::styled("█", Style::default().fg(c.border_focused)));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

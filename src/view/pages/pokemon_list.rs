//! Pokemon 列表页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染 Pokemon 列表页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 过滤/页号行
            Constraint::Min(1),    // 列表
        ])
        .split(area);

    render_header(app, frame, layout[0]);

    let visible = app.pokemon_list.visible_entries();
    if visible.is_empty() {
        render_empty(app, frame, layout[1]);
    } else {
        render_list(app, frame, layout[1]);
    }
}

/// 渲染过滤串与页号
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let list = &app.pokemon_list;

    let mut spans = vec![Span::styled(
        format!(" Page {}", list.page),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    )];

    if list.count > 0 {
        spans.push(Span::styled(
            format!("  ({} total)", list.count),
            Style::default().fg(c.muted),
        ));
    }

    if list.filtering || !list.filter.is_empty() {
        let cursor = if list.filtering { "█" } else { "" };
        spans.push(Span::styled(
            format!("  /{}{}", list.filter, cursor),
            Style::default().fg(c.border_focused),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 渲染空状态
///
/// 越过末尾的页合法地为空，不是错误。
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hint = if app.pokemon_list.entries.is_empty() {
        "  No pokemon on this page"
    } else {
        "  No match for the current filter"
    };

    let content = vec![
        Line::from(""),
        Line::styled(hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_list();

    let items: Vec<ListItem> = app
        .pokemon_list
        .visible_entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_selected = i == app.pokemon_list.selected;

            let style = if is_selected && is_focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(c.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(c.selected_unfocused)
            } else {
                Style::default().fg(c.body)
            };

            let prefix = if is_selected { "▶ " } else { "  " };
            let line = Line::from(Span::styled(format!("{}{}", prefix, entry.name), style));

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.pokemon_list.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

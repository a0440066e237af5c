//! 左侧侧边栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染侧边栏
///
/// 每一行区分 {选中/未选中} × {侧边栏聚焦/未聚焦}
/// 四种组合，纯展示，不影响状态。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_sidebar();

    // 边框样式
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Menu ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    // 构建目的地列表
    let items: Vec<ListItem> = app
        .sidebar
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == app.sidebar.selected;
            let prefix = if is_selected { "▶ " } else { "  " };

            let color = match (is_selected, is_focused) {
                (true, true) => c.selected_focused,
                (true, false) => c.selected_unfocused,
                (false, true) => c.unselected_focused,
                (false, false) => c.unselected_unfocused,
            };

            let mut style = Style::default().fg(color);
            if is_selected {
                style = style.add_modifier(Modifier::BOLD);
            }

            let content = format!("{}{}", prefix, item.label);
            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.sidebar.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

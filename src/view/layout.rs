//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Route};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧侧边栏
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(content_area);

    let sidebar_area = columns[0];
    let page_area = columns[1];

    // 渲染左侧侧边栏
    components::sidebar::render(app, frame, sidebar_area);

    // 渲染右侧内容
    render_page_content(app, frame, page_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Pokedex")
        .style(Style::default().fg(c.header).add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

/// 根据当前路由渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 内容区域的边框：焦点不在侧边栏时视为内容区持有焦点
    let is_focused = !app.focus.is_sidebar();
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(format!(" {} ", app.current_route.title()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 根据当前路由渲染具体内容
    match app.current_route {
        Route::Pokedex => pages::pokedex::render(app, frame, inner_area),
        Route::PokemonList => pages::pokemon_list::render(app, frame, inner_area),
        route => pages::placeholder::render(route, frame, inner_area),
    }
}

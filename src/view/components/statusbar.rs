//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(colors().status),
        ));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content);

    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    hints.push(("Tab", "Menu"));

    match app.focus {
        FocusPanel::Sidebar => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::List => {
            if app.pokemon_list.filtering {
                hints.push(("Enter", "Done"));
            } else {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Page"));
                hints.push(("/", "Filter"));
                hints.push(("Enter", "View"));
            }
        }
        FocusPanel::SearchInput => {
            hints.push(("Enter", "Search"));
        }
    }

    hints.push(("Esc", "Quit"));

    hints
}

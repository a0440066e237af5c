//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::{App, Route};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // Tab: 把焦点移交给侧边栏
    if DefaultKeymap::FOCUS_SIDEBAR.matches(&key) {
        return AppMessage::FocusSidebar;
    }

    // 根据焦点位置处理按键；焦点不在侧边栏时，
    // 目标面板由当前活动路由重新推导（权威来源）
    if app.focus.is_sidebar() {
        handle_sidebar_keys(key)
    } else {
        match app.current_route {
            Route::Pokedex => handle_pokedex_keys(key),
            Route::PokemonList => handle_list_keys(key, app),
            _ => AppMessage::Noop, // 占位路由不消费按键
        }
    }
}

/// 处理侧边栏的按键
fn handle_sidebar_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移（环绕）
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移（环绕）
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 激活选中的目的地
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理 Pokedex 检索页的按键
fn handle_pokedex_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Enter: 提交查询
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),

        // 字符输入（允许 Shift 以输入大写）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理 Pokemon 列表页的按键
fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 正在编辑过滤串时，按键进入过滤串
    if app.pokemon_list.filtering {
        return match key.code {
            KeyCode::Enter => AppMessage::Content(ContentMessage::FilterEnd),
            KeyCode::Backspace => AppMessage::Content(ContentMessage::FilterBackspace),
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                AppMessage::Content(ContentMessage::FilterInput(ch))
            }
            _ => AppMessage::Noop,
        };
    }

    if DefaultKeymap::PAGE_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevPage);
    }
    if DefaultKeymap::PAGE_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }
    if DefaultKeymap::FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::FilterStart);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),

        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),

        // Enter: 激活高亮条目
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_from_any_focus() {
        let mut app = App::new();
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        for focus in [FocusPanel::Sidebar, FocusPanel::List, FocusPanel::SearchInput] {
            app.focus = focus;
            assert!(matches!(
                handle_key_event(quit, &app),
                AppMessage::Quit
            ));
        }
    }

    #[test]
    fn tab_hands_focus_to_sidebar() {
        let app = App::new();
        assert!(matches!(
            handle_key_event(press(KeyCode::Tab), &app),
            AppMessage::FocusSidebar
        ));
    }

    #[test]
    fn routing_follows_active_route_not_focus_history() {
        let mut app = App::new();
        app.focus = FocusPanel::List;
        app.current_route = Route::PokemonList;

        assert!(matches!(
            handle_key_event(press(KeyCode::Right), &app),
            AppMessage::Content(ContentMessage::NextPage)
        ));

        // 活动路由切到 Pokedex 后，同一个按键走检索页处理
        app.current_route = Route::Pokedex;
        app.focus = FocusPanel::SearchInput;
        assert!(matches!(
            handle_key_event(press(KeyCode::Backspace), &app),
            AppMessage::Content(ContentMessage::Backspace)
        ));
    }

    #[test]
    fn placeholder_routes_consume_nothing() {
        let mut app = App::new();
        app.focus = FocusPanel::List;
        app.current_route = Route::Moves;

        assert!(matches!(
            handle_key_event(press(KeyCode::Enter), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::new();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;

        assert!(matches!(
            handle_key_event(key, &app),
            AppMessage::Noop
        ));
    }
}

//! 事件处理器
//!
//! 把 crossterm 的原始事件翻译为 `AppMessage`。
//! 导航键不在这里分发，统一交给 `update::InputRouter`。

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

use crate::event::keymap::{DefaultKeymap, NavKey};
use crate::message::AppMessage;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(&key_event),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppMessage::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppMessage::Noop,
        },
        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: &KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if let Some(nav) = NavKey::from_key_event(key) {
        return AppMessage::Key(nav);
    }

    // 导航键之外的全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(key) || DefaultKeymap::QUIT.matches(key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::REFRESH.matches(key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::SIGN_OUT.matches(key) {
        return AppMessage::SignOut;
    }

    AppMessage::Noop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEventState, KeyModifiers, MouseEvent,
    };

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigation_keys_become_key_messages() {
        assert!(matches!(
            handle_event(press(KeyCode::Down)),
            AppMessage::Key(NavKey::Down)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc)),
            AppMessage::Key(NavKey::Escape)
        ));
    }

    #[test]
    fn global_shortcuts() {
        assert!(matches!(handle_event(press(KeyCode::Char('q'))), AppMessage::Quit));
        assert!(matches!(
            handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            AppMessage::Quit
        ));
        assert!(matches!(handle_event(press(KeyCode::Char('r'))), AppMessage::Refresh));
        assert!(matches!(handle_event(press(KeyCode::Char('s'))), AppMessage::SignOut));
        assert!(matches!(handle_event(press(KeyCode::Char('x'))), AppMessage::Noop));
    }

    #[test]
    fn release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(handle_event(Event::Key(release)), AppMessage::Noop));
    }

    #[test]
    fn left_click_carries_position() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            handle_event(Event::Mouse(click)),
            AppMessage::Click { column: 12, row: 4 }
        ));
    }
}

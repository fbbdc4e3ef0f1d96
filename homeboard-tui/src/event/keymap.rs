//! 快捷键配置
//!
//! 遥控器式导航键集合，以及导航键之外的全局快捷键

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MediaKeyCode};

/// Keys the zone focus controller recognizes.
///
/// Anything else never reaches the controller and keeps its normal meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    PlayPause,
}

impl NavKey {
    /// 将按键事件映射为导航键；带修饰键的组合不属于导航键
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if !(key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) {
            return None;
        }
        match key.code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Esc => Some(Self::Escape),
            KeyCode::Char(' ') => Some(Self::Space),
            KeyCode::Media(MediaKeyCode::PlayPause | MediaKeyCode::Play | MediaKeyCode::Pause) => {
                Some(Self::PlayPause)
            }
            _ => None,
        }
    }
}

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const SIGN_OUT: KeyBinding = KeyBinding::key(KeyCode::Char('s'));
}

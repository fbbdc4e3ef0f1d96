//! 分区焦点控制器
//!
//! 整页只有一个控制器，所以任一时刻最多一个分区处于激活状态。
//!
//! 状态：
//!     focused: None          // 无焦点（对应 -1）
//!     focused: Some(i)       // 第 i 个分区有焦点
//!     active: true           // 焦点分区已激活，按键转交给它
//!
//! 转移：
//!     未激活  ↓ / →     (i + 1) mod n，无焦点时到 0
//!     未激活  ↑ / ←     (i - 1 + n) mod n，无焦点时到 n - 1
//!     未激活  Enter     有焦点时激活
//!     未激活  Esc       有焦点时取消焦点
//!     已激活  Esc       退出激活，焦点保留
//!     已激活  其他键    原样转交给激活的分区

use crate::event::NavKey;

/// What the controller did with a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The controller changed state; nothing else sees the key.
    Consumed,
    /// A zone is active; forward the key to it.
    PassThrough,
    /// No transition applies.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFocus {
    zone_count: usize,
    focused: Option<usize>,
    active: bool,
}

impl ZoneFocus {
    pub fn new(zone_count: usize) -> Self {
        Self {
            zone_count,
            focused: None,
            active: false,
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Index of the active zone, if any.
    pub fn active_zone(&self) -> Option<usize> {
        self.focused.filter(|_| self.is_active())
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    pub fn is_zone_active(&self, index: usize) -> bool {
        self.active_zone() == Some(index)
    }

    /// Focus and activate `index` in one step. Out-of-range indices are ignored.
    pub fn activate_zone(&mut self, index: usize) {
        if index >= self.zone_count {
            return;
        }
        self.focused = Some(index);
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if self.zone_count == 0 {
            return KeyOutcome::Ignored;
        }

        if self.active {
            return match key {
                NavKey::Escape => {
                    self.deactivate();
                    KeyOutcome::Consumed
                }
                _ => KeyOutcome::PassThrough,
            };
        }

        let n = self.zone_count;
        match (key, self.focused) {
            (NavKey::Down | NavKey::Right, focused) => {
                self.focused = Some(focused.map_or(0, |i| (i + 1) % n));
                KeyOutcome::Consumed
            }
            (NavKey::Up | NavKey::Left, focused) => {
                self.focused = Some(focused.map_or(n - 1, |i| (i + n - 1) % n));
                KeyOutcome::Consumed
            }
            (NavKey::Enter, Some(_)) => {
                self.active = true;
                KeyOutcome::Consumed
            }
            (NavKey::Escape, Some(_)) => {
                self.focused = None;
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

//! 输入事件处理模块

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::NavKey;

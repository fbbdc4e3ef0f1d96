//! 工具模块

mod logging;
pub mod terminal;
pub mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};

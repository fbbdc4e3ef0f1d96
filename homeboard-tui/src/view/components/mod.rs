//! 通用 UI 组件

pub mod banner;
pub mod rows;
pub mod statusbar;
pub mod zone_frame;

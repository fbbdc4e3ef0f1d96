//! Message 层：事件消息定义
//!
//!     AppMessage      // 输入与后台结果，交给 update 消费
//!     WidgetCommand   // 分区发出的请求（加载、持久化、播放）
//!     Command         // update 交给 backend 执行的副作用
//!     DataMessage     // backend 通过 mpsc 回传的结果

mod app;
mod command;
mod data;

pub use app::AppMessage;
pub use command::{Command, WidgetCommand};
pub use data::DataMessage;

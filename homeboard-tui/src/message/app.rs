//! 应用级消息

use crate::event::NavKey;
use crate::message::DataMessage;

/// 应用级消息
#[derive(Debug)]
pub enum AppMessage {
    /// 导航键（交给 InputRouter）
    Key(NavKey),
    /// 鼠标左键点击
    Click { column: u16, row: u16 },
    /// 退出应用
    Quit,
    /// 使缓存失效并重新拉取
    Refresh,
    /// 退出登录
    SignOut,
    /// 后台结果
    Data(DataMessage),
    /// 无操作
    Noop,
}

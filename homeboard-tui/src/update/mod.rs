//! Update 层：状态更新逻辑
//!
//! `update` 是 App 的唯一修改入口，返回需要 backend 执行的副作用。
//!
//!     AppMessage::Key     → InputRouter::route_key
//!     AppMessage::Click   → InputRouter::route_click
//!     AppMessage::Data    → data::apply
//!
//! 会话失效（auth_required）后只放行本地命令（持久化选择、播放器），
//! 远程请求一律丢弃，直到重新登录并重启。

mod data;
mod router;

pub use data::initial_loads;
pub use router::InputRouter;

use crate::message::{AppMessage, Command, WidgetCommand};
use crate::model::App;

/// 处理消息，更新状态
pub fn update(app: &mut App, router: &InputRouter, msg: AppMessage) -> Vec<Command> {
    let commands = match msg {
        AppMessage::Key(key) => {
            if app.auth_required {
                return Vec::new();
            }
            widget_commands(router.route_key(app, key))
        }
        AppMessage::Click { column, row } => {
            if app.auth_required {
                return Vec::new();
            }
            widget_commands(router.route_click(app, column, row))
        }
        AppMessage::Quit => {
            // 退出前先让激活的分区执行退出钩子，待完成任务随之提交
            let commands = widget_commands(router.release_active(app));
            app.should_quit = true;
            commands
        }
        AppMessage::Refresh => {
            if app.auth_required {
                app.set_status("Sign in required: run `homeboard sign-in <refresh-token>`");
                Vec::new()
            } else {
                app.set_status("Refreshing...");
                vec![Command::RefreshAll]
            }
        }
        AppMessage::SignOut => vec![Command::SignOut],
        AppMessage::Data(data) => data::apply(app, data),
        AppMessage::Noop => Vec::new(),
    };

    gate(app, commands)
}

fn widget_commands(commands: Vec<WidgetCommand>) -> Vec<Command> {
    commands.into_iter().map(Command::from).collect()
}

/// Drop remote commands once the session is gone.
fn gate(app: &mut App, commands: Vec<Command>) -> Vec<Command> {
    if !app.auth_required {
        return commands;
    }
    commands
        .into_iter()
        .filter(|command| match command {
            Command::Widget(widget) if widget.is_remote() => {
                data::discard(app, widget);
                false
            }
            Command::Widget(_) | Command::SignOut => true,
            Command::RefreshAll | Command::RestoreSelections => false,
        })
        .collect()
}

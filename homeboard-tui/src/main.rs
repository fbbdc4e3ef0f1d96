//! Homeboard TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 用法：
//!     homeboard                           // 打开仪表盘
//!     homeboard sign-in <refresh-token>   // 用已有的 refresh token 建立会话
//!     homeboard sign-out                  // 删除会话
//!
//! 启动顺序：
//!     HomeboardConfig::load()     // 配置文件 + 环境变量
//!     init_logging()              // 日志写入数据目录
//!     AppState::from_config()     // 存储适配器与服务
//!     startup_status()            // 没有可用会话时直接显示登录提示
//!     RestoreSelections + 初始加载
//!     init_terminal() → app::run() → restore_terminal()

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use homeboard_app::{AppState, HomeboardConfig};
use homeboard_core::types::SessionStatus;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use backend::{Backend, ExternalPlayer};
use message::Command;
use util::{init_logging, init_terminal, restore_terminal};

/// How long quitting waits for task commits still in flight.
const WRITE_GRACE: Duration = Duration::from_secs(10);

const USAGE: &str = "usage: homeboard [sign-in <refresh-token> | sign-out]";

fn main() -> Result<()> {
    // 1. 配置与日志
    let config = HomeboardConfig::load()?;
    let _log_guard = init_logging(&config.data_dir().join("logs"))?;

    // 2. 运行时与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("homeboard-worker")
        .build()?;
    let state = Arc::new(AppState::from_config(&config)?);

    // 3. 子命令
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => {}
        ["sign-in", token] => return sign_in(&runtime, &state, token),
        ["sign-out"] => {
            runtime.block_on(state.token_manager.sign_out())?;
            println!("Signed out.");
            return Ok(());
        }
        _ => bail!("{USAGE}"),
    }

    // 4. 会话状态
    let status = runtime.block_on(state.startup_status())?;
    let mut app = model::App::new();
    app.auth_required = !matches!(status, SessionStatus::Active { .. });

    let (tx, rx) = mpsc::unbounded_channel();
    let player = Arc::new(ExternalPlayer::new(config.player.command.clone()));
    let backend = Backend::new(state, player, tx, runtime.handle().clone());

    if !app.auth_required {
        backend.execute(Command::RestoreSelections);
        for command in update::initial_loads(&mut app) {
            backend.execute(command.into());
        }
    }

    // 5. 终端
    let mut terminal = init_terminal()?;
    let result = app::run(
        &mut terminal,
        &mut app,
        &backend,
        rx,
        Duration::from_secs(config.refresh.interval_secs),
    );
    let restored = restore_terminal(&mut terminal);

    // 运行时随 main 返回而销毁，未完成的提交要先等完
    runtime.block_on(backend.finish_writes(WRITE_GRACE));
    restored?;

    tracing::info!("Homeboard exiting");
    result
}

fn sign_in(runtime: &Runtime, state: &AppState, refresh_token: &str) -> Result<()> {
    runtime.block_on(state.token_manager.import_refresh_token(refresh_token))?;
    println!("Signed in. Start `homeboard` to open the dashboard.");
    Ok(())
}

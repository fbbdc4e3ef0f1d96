//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(...)                          // 渲染 UI，并记录各分区区域（鼠标命中测试用）
//!     if app.should_quit { break }                // 检查 APP 是否应该退出
//!     while let Ok(data) = rx.try_recv() { ... }  // 取回后台结果，写回 Model
//!     if 到了刷新间隔 { Refresh }                 // 被动刷新：使缓存失效后重新拉取
//!     if let Some(event) = poll_event() {         // 轮询输入，在此等待 100ms
//!         let msg = handle_event(event);              // 原始事件 → 消息
//!         update::update(&mut app, &router, msg)      // 更新状态，得到副作用
//!     }
//!     backend.execute(command)                    // 副作用交给后台异步执行
//! }

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, Command, DataMessage};
use crate::model::App;
use crate::update::{self, InputRouter};
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    mut rx: UnboundedReceiver<DataMessage>,
    refresh_every: Duration,
) -> Result<()> {
    let mut router = InputRouter::new();
    log::debug!("Key handlers: {:?}", router.handler_names());
    let mut last_refresh = Instant::now();

    loop {
        // 1. 渲染 UI
        let mut areas = Vec::new();
        terminal.draw(|frame| {
            areas = view::render(app, frame);
        })?;
        router.set_zone_areas(areas);

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 取回后台结果
        let mut commands: Vec<Command> = Vec::new();
        while let Ok(data) = rx.try_recv() {
            commands.extend(update::update(app, &router, AppMessage::Data(data)));
        }

        // 4. 被动刷新
        if last_refresh.elapsed() >= refresh_every {
            last_refresh = Instant::now();
            if !app.auth_required {
                log::debug!("Periodic refresh");
                commands.push(Command::RefreshAll);
            }
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event);
            if matches!(msg, AppMessage::Refresh) {
                last_refresh = Instant::now();
            }
            commands.extend(update::update(app, &router, msg));
        }

        // 6. 执行副作用
        for command in commands {
            backend.execute(command);
        }
    }

    Ok(())
}

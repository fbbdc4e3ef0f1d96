//! 输入分发
//!
//! `InputRouter` 是终端输入的唯一消费者。导航键按注册顺序依次交给处理器，
//! 处理器返回 `Dispatch::PassThrough` 时才交给下一个：
//!
//!     EscapeCapture   激活分区内有子菜单或查看器打开时，Esc 交给分区
//!          ↓
//!     FocusController 分区焦点控制器
//!          ↓
//!     ActiveZone      控制器放行的按键交给激活的分区
//!
//! 鼠标点击直接激活所在分区，先执行旧分区的退出钩子。

use ratatui::layout::{Position, Rect};

use crate::event::NavKey;
use crate::message::WidgetCommand;
use crate::model::{App, KeyOutcome, ZoneId};

/// What a handler did with a key.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    Handled(Vec<WidgetCommand>),
    PassThrough,
}

/// One stage of key dispatch.
pub trait KeyHandler {
    fn name(&self) -> &'static str;
    fn handle(&self, app: &mut App, key: NavKey) -> Dispatch;
}

/// Escape closes whatever the active zone has open before the controller sees it.
pub struct EscapeCapture;

impl KeyHandler for EscapeCapture {
    fn name(&self) -> &'static str {
        "escape-capture"
    }

    fn handle(&self, app: &mut App, key: NavKey) -> Dispatch {
        if key != NavKey::Escape {
            return Dispatch::PassThrough;
        }
        match app.active_zone() {
            Some(zone) if app.widget(zone).captures_escape() => {
                Dispatch::Handled(app.widget_mut(zone).handle_key(key))
            }
            _ => Dispatch::PassThrough,
        }
    }
}

/// The zone focus controller.
pub struct FocusController;

impl KeyHandler for FocusController {
    fn name(&self) -> &'static str {
        "focus-controller"
    }

    fn handle(&self, app: &mut App, key: NavKey) -> Dispatch {
        let before = app.active_zone();
        match app.focus.handle_key(key) {
            KeyOutcome::Consumed => Dispatch::Handled(run_zone_hooks(app, before)),
            KeyOutcome::PassThrough => Dispatch::PassThrough,
            KeyOutcome::Ignored => Dispatch::Handled(Vec::new()),
        }
    }
}

/// Keys the controller passed through go to the active zone.
pub struct ActiveZone;

impl KeyHandler for ActiveZone {
    fn name(&self) -> &'static str {
        "active-zone"
    }

    fn handle(&self, app: &mut App, key: NavKey) -> Dispatch {
        match app.active_zone() {
            Some(zone) => Dispatch::Handled(app.widget_mut(zone).handle_key(key)),
            None => Dispatch::PassThrough,
        }
    }
}

/// Run exit and entry hooks after the active zone changed from `before`.
fn run_zone_hooks(app: &mut App, before: Option<ZoneId>) -> Vec<WidgetCommand> {
    let after = app.active_zone();
    if before == after {
        return Vec::new();
    }

    let mut commands = Vec::new();
    if let Some(zone) = before {
        commands.extend(app.widget_mut(zone).on_deactivate());
    }
    if let Some(zone) = after {
        commands.extend(app.widget_mut(zone).on_activate());
    }
    commands
}

pub struct InputRouter {
    handlers: Vec<Box<dyn KeyHandler>>,
    zone_areas: Vec<Rect>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::with_handlers(vec![
            Box::new(EscapeCapture),
            Box::new(FocusController),
            Box::new(ActiveZone),
        ])
    }
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router with an explicit handler order.
    pub fn with_handlers(handlers: Vec<Box<dyn KeyHandler>>) -> Self {
        Self {
            handlers,
            zone_areas: Vec::new(),
        }
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Screen rectangles of the zones, in `ZoneId` order, as last drawn.
    pub fn set_zone_areas(&mut self, areas: Vec<Rect>) {
        self.zone_areas = areas;
    }

    pub fn zone_at(&self, column: u16, row: u16) -> Option<ZoneId> {
        let position = Position::new(column, row);
        self.zone_areas
            .iter()
            .position(|area| area.contains(position))
            .and_then(ZoneId::from_index)
    }

    pub fn route_key(&self, app: &mut App, key: NavKey) -> Vec<WidgetCommand> {
        for handler in &self.handlers {
            if let Dispatch::Handled(commands) = handler.handle(app, key) {
                log::trace!("{key:?} handled by {}", handler.name());
                return commands;
            }
        }
        Vec::new()
    }

    /// Deactivate the active zone, if any, and run its exit hook.
    pub fn release_active(&self, app: &mut App) -> Vec<WidgetCommand> {
        let Some(zone) = app.active_zone() else {
            return Vec::new();
        };
        app.focus.deactivate();
        app.widget_mut(zone).on_deactivate()
    }

    /// Activate the zone under a click.
    pub fn route_click(&self, app: &mut App, column: u16, row: u16) -> Vec<WidgetCommand> {
        let Some(zone) = self.zone_at(column, row) else {
            return Vec::new();
        };
        let before = app.active_zone();
        if before == Some(zone) {
            return Vec::new();
        }

        // 旧分区先退出（例如提交待完成任务），再切换
        let mut commands = self.release_active(app);
        app.focus.activate_zone(zone.index());
        commands.extend(app.widget_mut(zone).on_activate());
        commands
    }
}

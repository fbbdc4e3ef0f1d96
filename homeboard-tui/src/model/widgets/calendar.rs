//! Calendar 分区：合并后的日程列表，无子菜单

use homeboard_core::types::{CalendarEvent, LoadState};
use homeboard_core::CoreResult;

use super::ZoneWidget;
use crate::event::NavKey;
use crate::message::WidgetCommand;
use crate::model::row_cursor::SegmentedRowCursor;
use crate::model::ZoneId;

#[derive(Debug, Default)]
pub struct CalendarWidget {
    events: LoadState<Vec<CalendarEvent>>,
    cursor: SegmentedRowCursor,
}

impl CalendarWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &LoadState<Vec<CalendarEvent>> {
        &self.events
    }

    pub fn cursor(&self) -> &SegmentedRowCursor {
        &self.cursor
    }

    /// Mark as loading and request the events.
    pub fn load(&mut self) -> Vec<WidgetCommand> {
        self.events = LoadState::Loading;
        vec![WidgetCommand::LoadZone(ZoneId::Calendar)]
    }

    pub fn set_events(&mut self, result: CoreResult<Vec<CalendarEvent>>) {
        self.events = result.into();
        self.cursor
            .set_content_len(self.events.data().map_or(0, Vec::len));
    }
}

impl ZoneWidget for CalendarWidget {
    fn on_activate(&mut self) -> Vec<WidgetCommand> {
        self.cursor.activate();
        if matches!(self.events, LoadState::Failed(_)) {
            return self.load();
        }
        Vec::new()
    }

    fn on_deactivate(&mut self) -> Vec<WidgetCommand> {
        self.cursor.deactivate();
        Vec::new()
    }

    fn handle_key(&mut self, key: NavKey) -> Vec<WidgetCommand> {
        match key {
            NavKey::Up => self.cursor.move_up(),
            NavKey::Down => self.cursor.move_down(),
            _ => {}
        }
        Vec::new()
    }
}

//! 通用选择器：标题行 + 可展开的子菜单 + 内容行
//!
//! Tasks / Photos / Music 三个分区共用同一套导航：
//!     标题行 Enter       展开或收起子菜单（首次展开时请求子菜单列表）
//!     子菜单行 Enter     确认选择，收起子菜单，光标回到标题行，持久化并加载内容
//!     内容行 Enter       交给具体分区处理
//!     Esc                子菜单展开时收起子菜单

use homeboard_core::types::{
    DriveFile, LoadState, Playlist, PlaylistItem, Selection, SelectionKey, Task, TaskList,
};
use homeboard_core::CoreResult;

use crate::event::NavKey;
use crate::message::WidgetCommand;
use crate::model::row_cursor::{Row, SegmentedRowCursor};
use crate::model::ZoneId;

/// A row that can be shown in a picker.
pub trait PickerItem {
    fn item_id(&self) -> &str;
    fn label(&self) -> &str;
}

impl PickerItem for TaskList {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl PickerItem for Task {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl PickerItem for DriveFile {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl PickerItem for Playlist {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        self.title()
    }
}

impl PickerItem for PlaylistItem {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        self.title()
    }
}

/// Result of a key handled by a picker.
#[derive(Debug, PartialEq, Eq)]
pub enum PickerEvent {
    Handled(Vec<WidgetCommand>),
    /// Enter on content row `index`; the owning zone decides what it means.
    ContentEnter(usize),
    Unhandled,
}

#[derive(Debug)]
pub struct Picker<S, C> {
    zone: ZoneId,
    key: SelectionKey,
    cursor: SegmentedRowCursor,
    menu: LoadState<Vec<S>>,
    content: LoadState<Vec<C>>,
    selected: Option<Selection>,
}

impl<S: PickerItem, C> Picker<S, C> {
    pub fn new(zone: ZoneId, key: SelectionKey) -> Self {
        Self {
            zone,
            key,
            cursor: SegmentedRowCursor::new(),
            menu: LoadState::Idle,
            content: LoadState::Idle,
            selected: None,
        }
    }

    pub fn cursor(&self) -> &SegmentedRowCursor {
        &self.cursor
    }

    pub fn menu(&self) -> &LoadState<Vec<S>> {
        &self.menu
    }

    pub fn content(&self) -> &LoadState<Vec<C>> {
        &self.content
    }

    pub fn content_mut(&mut self) -> Option<&mut Vec<C>> {
        self.content.data_mut()
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.cursor.is_menu_open()
    }

    pub fn activate(&mut self) {
        self.cursor.activate();
    }

    pub fn deactivate(&mut self) {
        self.cursor.deactivate();
    }

    pub fn handle_key(&mut self, key: NavKey) -> PickerEvent {
        match key {
            NavKey::Up => {
                self.cursor.move_up();
                PickerEvent::Handled(Vec::new())
            }
            NavKey::Down => {
                self.cursor.move_down();
                PickerEvent::Handled(Vec::new())
            }
            NavKey::Enter => match self.cursor.row() {
                Some(Row::Header) => PickerEvent::Handled(self.toggle_menu()),
                Some(Row::Submenu(i)) => PickerEvent::Handled(self.select(i)),
                Some(Row::Content(i)) => PickerEvent::ContentEnter(i),
                None => PickerEvent::Unhandled,
            },
            NavKey::Escape if self.is_menu_open() => {
                self.cursor.close_menu();
                self.cursor.home();
                PickerEvent::Handled(Vec::new())
            }
            _ => PickerEvent::Unhandled,
        }
    }

    /// Open or close the submenu. Opening requests the list unless it is loaded or loading.
    pub fn toggle_menu(&mut self) -> Vec<WidgetCommand> {
        if self.is_menu_open() {
            self.cursor.close_menu();
            self.cursor.home();
            return Vec::new();
        }

        self.cursor.open_menu();
        if matches!(self.menu, LoadState::Idle | LoadState::Failed(_)) {
            self.menu = LoadState::Loading;
            vec![WidgetCommand::LoadSubmenu(self.zone)]
        } else {
            Vec::new()
        }
    }

    /// Commit submenu item `index` as the selection.
    pub fn select(&mut self, index: usize) -> Vec<WidgetCommand> {
        let Some(item) = self.menu.data().and_then(|items| items.get(index)) else {
            return Vec::new();
        };
        let selection = Selection::new(item.item_id(), item.label());

        self.cursor.close_menu();
        self.cursor.home();
        let mut commands = self.load_selection(selection.clone());
        commands.insert(
            0,
            WidgetCommand::PersistSelection {
                key: self.key,
                selection,
            },
        );
        commands
    }

    /// Apply a persisted selection found at startup.
    pub fn restore(&mut self, selection: Selection) -> Vec<WidgetCommand> {
        if self.selected.is_some() {
            return Vec::new();
        }
        self.load_selection(selection)
    }

    pub fn set_menu(&mut self, result: CoreResult<Vec<S>>) {
        self.menu = result.into();
        let len = self.menu.data().map_or(0, Vec::len);
        self.cursor.set_submenu_len(len);
    }

    /// Store content fetched for `id`. Results for a selection that is no longer current are
    /// dropped; returns whether the content was applied.
    pub fn set_content(&mut self, id: &str, result: CoreResult<Vec<C>>) -> bool {
        if self.selected.as_ref().map(|s| s.id.as_str()) != Some(id) {
            log::debug!("Dropping stale {:?} content for {id}", self.zone);
            return false;
        }
        self.content = result.into();
        self.sync_content_len();
        true
    }

    /// Recount content rows after the zone edited them in place.
    pub fn sync_content_len(&mut self) {
        let len = self.content.data().map_or(0, Vec::len);
        self.cursor.set_content_len(len);
    }

    /// Forget loaded data after the cache was invalidated and request it again.
    pub fn reload(&mut self) -> Vec<WidgetCommand> {
        let mut commands = Vec::new();
        if self.is_menu_open() {
            self.menu = LoadState::Loading;
            commands.push(WidgetCommand::LoadSubmenu(self.zone));
        } else {
            self.menu = LoadState::Idle;
            self.cursor.set_submenu_len(0);
        }
        if let Some(selection) = &self.selected {
            commands.push(WidgetCommand::LoadContent {
                zone: self.zone,
                id: selection.id.clone(),
            });
        }
        commands
    }

    fn load_selection(&mut self, selection: Selection) -> Vec<WidgetCommand> {
        let id = selection.id.clone();
        self.selected = Some(selection);
        self.content = LoadState::Loading;
        self.cursor.set_content_len(0);
        vec![WidgetCommand::LoadContent {
            zone: self.zone,
            id,
        }]
    }
}

//! 副作用请求

use homeboard_core::services::TaskRef;
use homeboard_core::types::{Selection, SelectionKey};

use crate::model::ZoneId;

/// Requests raised by a zone while handling a key or a data message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    /// Fetch the submenu list (task lists, folders, playlists).
    LoadSubmenu(ZoneId),
    /// Fetch the content rows for the selected submenu item.
    LoadContent { zone: ZoneId, id: String },
    /// Fetch the data of a zone without a submenu.
    LoadZone(ZoneId),
    PersistSelection {
        key: SelectionKey,
        selection: Selection,
    },
    CommitTasks(Vec<TaskRef>),
    Play { title: String, url: String },
    TogglePause,
}

impl WidgetCommand {
    /// Whether executing this command calls a remote API.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::LoadSubmenu(_) | Self::LoadContent { .. } | Self::LoadZone(_) | Self::CommitTasks(_)
        )
    }
}

/// Side effects handed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Widget(WidgetCommand),
    /// Invalidate every cached read, then reload the zones.
    RefreshAll,
    SignOut,
    /// Read the persisted submenu selections.
    RestoreSelections,
}

impl From<WidgetCommand> for Command {
    fn from(command: WidgetCommand) -> Self {
        Self::Widget(command)
    }
}

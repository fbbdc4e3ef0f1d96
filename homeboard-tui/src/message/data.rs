//! 后台结果消息

use homeboard_core::services::CommitReport;
use homeboard_core::types::{
    AstronomyPicture, CalendarEvent, DriveFile, Playlist, PlaylistItem, Selection, Task, TaskList,
    WeatherReport,
};
use homeboard_core::CoreResult;

use crate::model::ZoneId;

/// Results sent back by the backend over the mpsc channel.
#[derive(Debug)]
pub enum DataMessage {
    SelectionRestored { zone: ZoneId, selection: Selection },
    TaskLists(CoreResult<Vec<TaskList>>),
    Tasks {
        list_id: String,
        result: CoreResult<Vec<Task>>,
    },
    PhotoFolders(CoreResult<Vec<DriveFile>>),
    Photos {
        folder_id: String,
        result: CoreResult<Vec<DriveFile>>,
    },
    Playlists(CoreResult<Vec<Playlist>>),
    PlaylistItems {
        playlist_id: String,
        result: CoreResult<Vec<PlaylistItem>>,
    },
    Events(CoreResult<Vec<CalendarEvent>>),
    Weather(CoreResult<WeatherReport>),
    Astronomy(CoreResult<AstronomyPicture>),
    TasksCommitted(CoreResult<CommitReport>),
    /// Every cache was dropped; zones should reload.
    CacheInvalidated,
    SignedOut(CoreResult<()>),
    PlayerStarted { title: String },
    PlayerFailed(String),
    Status(String),
}

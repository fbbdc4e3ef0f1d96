//! 持久化选择类型定义

use serde::{Deserialize, Serialize};

/// A widget's persisted choice (task list, photo folder, playlist).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,
    pub name: String,
}

impl Selection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Which widget a selection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKey {
    TaskList,
    PhotoFolder,
    Playlist,
}

impl SelectionKey {
    /// Stable storage key.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::TaskList => "homeboard.tasks.selectedList",
            Self::PhotoFolder => "homeboard.photos.selectedFolder",
            Self::Playlist => "homeboard.music.selectedPlaylist",
        }
    }
}

//! 类型定义模块

mod load_state;
mod selection;
mod session;

pub use load_state::LoadState;
pub use selection::{Selection, SelectionKey};
pub use session::{SessionError, SessionStatus, TokenRecord};

// Re-export fetch-layer types used by widgets
pub use homeboard_api::{
    AstronomyPicture, CalendarEvent, CalendarListEntry, DriveFile, PickedMediaItem, PickerSession,
    Playlist, PlaylistItem, Task, TaskList, TaskStatus, TokenGrant, WeatherReport,
};

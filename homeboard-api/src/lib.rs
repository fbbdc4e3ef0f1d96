//! # homeboard-api
//!
//! Authenticated fetch layer and REST collaborators for the Homeboard dashboard.
//!
//! ## Collaborators
//!
//! | API | Type | Auth |
//! |-----|------|------|
//! | Google Calendar v3 | [`CalendarApi`] | Bearer token |
//! | Google Tasks v1 | [`TasksApi`] | Bearer token |
//! | Google Drive v3 | [`DriveApi`] | Bearer token |
//! | Google Photos Picker | [`PhotosPickerApi`] | Bearer token |
//! | YouTube Data v3 | [`YoutubeApi`] | Bearer token |
//! | Open-Meteo | [`WeatherApi`] | none |
//! | NASA APOD | [`ApodApi`] | API key |
//! | Google OAuth token endpoint | [`OAuthTokenEndpoint`] | client credentials |
//!
//! ## Fetch semantics
//!
//! - Non-2xx responses become [`ApiError::Upstream`] carrying status and body. A body that
//!   cannot be read is reported as empty.
//! - `204 No Content` on a mutation is a success with no payload.
//! - Paginated lists are drained through [`drain_pages`], which refuses a repeated
//!   `nextPageToken`.
//! - Fan-outs go through [`settle_all`]: failed members are skipped and the successes are merged
//!   and sorted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use homeboard_api::{ApiSuite, TimeWindow};
//!
//! # async fn run(token: &str) -> homeboard_api::Result<()> {
//! let apis = ApiSuite::new();
//! let calendars = apis.calendar.list_calendars(token).await?;
//! let ids: Vec<String> = calendars.into_iter().map(|c| c.id).collect();
//! let merged = apis
//!     .calendar
//!     .list_events_across(token, &ids, &TimeWindow::upcoming_days(Utc::now(), 7))
//!     .await;
//! for event in &merged.items {
//!     println!("{} {}", event.starts_at(), event.summary);
//! }
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod client;
mod error;
mod factory;
mod http_client;
mod oauth;
mod pagination;
mod services;
mod types;
/// Utility modules (date/time helpers, log sanitization).
pub mod utils;

pub use aggregate::{Aggregate, settle_all};
pub use client::{AuthedClient, MutateMethod, create_http_client};
pub use error::{ApiError, Result};
pub use factory::ApiSuite;
pub use http_client::HttpUtils;
pub use oauth::{GOOGLE_TOKEN_URL, OAuthTokenEndpoint, TokenGrant};
pub use pagination::{MAX_PAGES, Page, drain_pages};
pub use services::{
    APOD_API_BASE, ApodApi, CALENDAR_API_BASE, CalendarApi, DRIVE_API_BASE, DriveApi,
    PHOTOS_PICKER_API_BASE, PhotosPickerApi, TASKS_API_BASE, TasksApi, WEATHER_API_BASE,
    WeatherApi, YOUTUBE_API_BASE, YoutubeApi,
};
pub use types::{
    AstronomyPicture, CalendarEvent, CalendarListEntry, CurrentWeather, DRIVE_FOLDER_MIME,
    DriveFile, EventTime, MediaFile, PickedMediaItem, PickerSession, Playlist, PlaylistItem,
    PlaylistItemSnippet, PlaylistSnippet, ResourceId, Task, TaskList, TaskStatus, TimeWindow,
    WeatherReport,
};

//! Wire types for the remote collaborators.
//!
//! Only the fields the dashboard uses are modelled; unknown fields are ignored.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime::{parse_date, parse_rfc3339};

// ============ 通用 ============

/// Half-open time range `[start, end)` used for event queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// `now` until `now + days`.
    pub fn upcoming_days(now: DateTime<Utc>, days: u32) -> Self {
        Self {
            start: now,
            end: now + Duration::days(i64::from(days)),
        }
    }
}

// ============ Calendar ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarListEntry {
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub background_color: Option<String>,
}

/// `start` / `end` of an event: either a timestamp or an all-day date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl EventTime {
    pub fn is_all_day(&self) -> bool {
        self.date_time.is_none() && self.date.is_some()
    }

    /// Instant this time refers to; all-day dates map to midnight UTC.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.date_time
            .as_deref()
            .and_then(parse_rfc3339)
            .or_else(|| self.date.as_deref().and_then(parse_date))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
    #[serde(default)]
    pub location: Option<String>,
    /// Calendar the event was fetched from; filled in by the fetch layer.
    #[serde(default)]
    pub calendar_id: Option<String>,
}

impl CalendarEvent {
    /// Sort key for merged event lists: start instant, unparsable starts last.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.start.instant().unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

// ============ Tasks ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    NeedsAction,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

// ============ Drive ============

/// Drive folder mime type.
pub const DRIVE_FOLDER_MIME: &str = "application/vnd.google-apps.folder";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
    #[serde(default)]
    pub web_content_link: Option<String>,
}

impl DriveFile {
    pub fn is_folder(&self) -> bool {
        self.mime_type == DRIVE_FOLDER_MIME
    }
}

// ============ Photos Picker ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerSession {
    pub id: String,
    #[serde(default)]
    pub picker_uri: String,
    #[serde(default)]
    pub media_items_set: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub base_url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickedMediaItem {
    pub id: String,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub media_file: Option<MediaFile>,
}

/// Picked items are shown in the same rows as Drive photos. Base URLs need a size or
/// download suffix before they serve bytes.
impl From<PickedMediaItem> for DriveFile {
    fn from(item: PickedMediaItem) -> Self {
        match item.media_file {
            Some(file) => Self {
                name: if file.filename.is_empty() { item.id.clone() } else { file.filename },
                id: item.id,
                mime_type: file.mime_type,
                thumbnail_link: Some(format!("{}=w512-h512", file.base_url)),
                web_content_link: Some(format!("{}=d", file.base_url)),
            },
            None => Self {
                name: item.id.clone(),
                id: item.id,
                mime_type: String::new(),
                thumbnail_link: None,
                web_content_link: None,
            },
        }
    }
}

// ============ YouTube ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub snippet: PlaylistSnippet,
}

impl Playlist {
    pub fn title(&self) -> &str {
        &self.snippet.title
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub video_owner_channel_title: Option<String>,
    #[serde(default)]
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    #[serde(default)]
    pub snippet: PlaylistItemSnippet,
}

impl PlaylistItem {
    pub fn title(&self) -> &str {
        &self.snippet.title
    }

    pub fn video_id(&self) -> Option<&str> {
        self.snippet.resource_id.video_id.as_deref()
    }

    /// Watch URL handed to the external player.
    pub fn watch_url(&self) -> Option<String> {
        self.video_id()
            .map(|id| format!("https://www.youtube.com/watch?v={id}"))
    }
}

// ============ Weather ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub time: String,
    pub temperature_2m: f64,
    pub weather_code: u16,
    #[serde(default)]
    pub wind_speed_10m: f64,
    #[serde(default)]
    pub is_day: u8,
}

impl CurrentWeather {
    /// Human label for a WMO weather interpretation code.
    pub fn condition(&self) -> &'static str {
        match self.weather_code {
            0 => "Clear sky",
            1..=3 => "Partly cloudy",
            45 | 48 => "Fog",
            51..=57 => "Drizzle",
            61..=67 => "Rain",
            71..=77 => "Snow",
            80..=82 => "Rain showers",
            85 | 86 => "Snow showers",
            95..=99 => "Thunderstorm",
            _ => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    pub current: CurrentWeather,
}

// ============ APOD ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronomyPicture {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub copyright: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn all_day_event_sorts_at_midnight() {
        let event: CalendarEvent = serde_json::from_str(
            r#"{"id":"e1","summary":"Holiday","start":{"date":"2024-05-02"},"end":{"date":"2024-05-03"}}"#,
        )
        .unwrap();
        assert!(event.start.is_all_day());
        assert_eq!(
            event.starts_at(),
            Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn timed_event_parses_date_time() {
        let event: CalendarEvent = serde_json::from_str(
            r#"{"id":"e2","start":{"dateTime":"2024-05-01T10:00:00Z"}}"#,
        )
        .unwrap();
        assert!(!event.start.is_all_day());
        assert_eq!(
            event.starts_at(),
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn event_without_start_sorts_last() {
        let event: CalendarEvent = serde_json::from_str(r#"{"id":"e3"}"#).unwrap();
        assert_eq!(event.starts_at(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn picked_item_becomes_photo_row() {
        let item: PickedMediaItem = serde_json::from_str(
            r#"{"id":"m1","mediaFile":{"baseUrl":"https://lh3/m1","mimeType":"image/jpeg","filename":"beach.jpg"}}"#,
        )
        .unwrap();
        let file = DriveFile::from(item);
        assert_eq!(file.name, "beach.jpg");
        assert_eq!(file.web_content_link.as_deref(), Some("https://lh3/m1=d"));
        assert!(!file.is_folder());

        let bare: PickedMediaItem = serde_json::from_str(r#"{"id":"m2"}"#).unwrap();
        let file = DriveFile::from(bare);
        assert_eq!(file.name, "m2");
        assert_eq!(file.web_content_link, None);
    }

    #[test]
    fn task_status_wire_names() {
        let task: Task =
            serde_json::from_str(r#"{"id":"t","title":"Milk","status":"completed"}"#).unwrap();
        assert!(task.is_completed());
        let open: Task = serde_json::from_str(r#"{"id":"t","status":"needsAction"}"#).unwrap();
        assert!(!open.is_completed());
    }

    #[test]
    fn playlist_item_watch_url() {
        let item: PlaylistItem = serde_json::from_str(
            r#"{"id":"pi","snippet":{"title":"Song","resourceId":{"videoId":"abc123"}}}"#,
        )
        .unwrap();
        assert_eq!(item.title(), "Song");
        assert_eq!(
            item.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
    }

    #[test]
    fn weather_condition_labels() {
        let current = CurrentWeather {
            time: "2024-05-01T10:00".into(),
            temperature_2m: 18.5,
            weather_code: 63,
            wind_speed_10m: 3.0,
            is_day: 1,
        };
        assert_eq!(current.condition(), "Rain");
    }

    #[test]
    fn drive_folder_detection() {
        let file = DriveFile {
            id: "f".into(),
            name: "Trips".into(),
            mime_type: DRIVE_FOLDER_MIME.into(),
            thumbnail_link: None,
            web_content_link: None,
        };
        assert!(file.is_folder());
    }
}

//! Google Calendar v3

use reqwest::Client;

use crate::aggregate::{Aggregate, settle_all};
use crate::client::AuthedClient;
use crate::error::Result;
use crate::types::{CalendarEvent, CalendarListEntry, TimeWindow};
use crate::utils::datetime::to_rfc3339;

use super::{drain_authed, normalize_base};

pub const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, Clone)]
pub struct CalendarApi {
    client: AuthedClient,
    base_url: String,
}

impl CalendarApi {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, CALENDAR_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: AuthedClient::new(http, "calendar"),
            base_url: normalize_base(base_url),
        }
    }

    /// Every calendar on the user's calendar list.
    pub async fn list_calendars(&self, token: &str) -> Result<Vec<CalendarListEntry>> {
        let url = format!("{}/users/me/calendarList", self.base_url);
        drain_authed(&self.client, &url, token, &[]).await
    }

    /// Expanded (single) events of one calendar inside `window`, ordered by start time.
    pub async fn list_events(
        &self,
        token: &str,
        calendar_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<CalendarEvent>> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(calendar_id)
        );
        let query = [
            ("timeMin", to_rfc3339(&window.start)),
            ("timeMax", to_rfc3339(&window.end)),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
        ];

        let mut events: Vec<CalendarEvent> =
            drain_authed(&self.client, &url, token, &query).await?;
        for event in &mut events {
            event.calendar_id = Some(calendar_id.to_string());
        }
        Ok(events)
    }

    /// Events of several calendars merged and sorted by start time.
    ///
    /// A calendar whose fetch fails is skipped.
    pub async fn list_events_across(
        &self,
        token: &str,
        calendar_ids: &[String],
        window: &TimeWindow,
    ) -> Aggregate<CalendarEvent> {
        let fetches = calendar_ids
            .iter()
            .map(|id| self.list_events(token, id, window));
        settle_all(self.client.service(), fetches, CalendarEvent::starts_at).await
    }
}

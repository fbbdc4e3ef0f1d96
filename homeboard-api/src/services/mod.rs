//! REST collaborators
//!
//! One thin struct per remote API, each holding an [`AuthedClient`] scoped to its service name
//! and an overridable base URL.

mod apod;
mod calendar;
mod drive;
mod photos;
mod tasks;
mod weather;
mod youtube;

pub use apod::{APOD_API_BASE, ApodApi};
pub use calendar::{CALENDAR_API_BASE, CalendarApi};
pub use drive::{DRIVE_API_BASE, DriveApi};
pub use photos::{PHOTOS_PICKER_API_BASE, PhotosPickerApi};
pub use tasks::{TASKS_API_BASE, TasksApi};
pub use weather::{WEATHER_API_BASE, WeatherApi};
pub use youtube::{YOUTUBE_API_BASE, YoutubeApi};

use serde::de::DeserializeOwned;

use crate::client::AuthedClient;
use crate::error::Result;
use crate::pagination::{Page, drain_pages};

/// Drain a paginated authenticated GET, appending `pageToken` after the first page.
pub(crate) async fn drain_authed<T: DeserializeOwned>(
    client: &AuthedClient,
    url: &str,
    token: &str,
    query: &[(&str, String)],
) -> Result<Vec<T>> {
    drain_pages(client.service(), |page_token| {
        let mut params = query.to_vec();
        if let Some(page_token) = page_token {
            params.push(("pageToken", page_token));
        }
        async move {
            client
                .authed_get_query::<Page<T>, _>(url, token, &params)
                .await
        }
    })
    .await
}

/// Strip a trailing slash so paths can be appended with `format!("{base}/...")`.
pub(crate) fn normalize_base(base_url: impl Into<String>) -> String {
    let mut base = base_url.into();
    while base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://x/api//"), "http://x/api");
        assert_eq!(normalize_base("http://x/api"), "http://x/api");
    }
}

//! YouTube Data API v3 (playlists)

use reqwest::Client;

use crate::client::AuthedClient;
use crate::error::Result;
use crate::types::{Playlist, PlaylistItem};

use super::{drain_authed, normalize_base};

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube's maximum page size.
const MAX_RESULTS: &str = "50";

#[derive(Debug, Clone)]
pub struct YoutubeApi {
    client: AuthedClient,
    base_url: String,
}

impl YoutubeApi {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, YOUTUBE_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: AuthedClient::new(http, "youtube"),
            base_url: normalize_base(base_url),
        }
    }

    /// The signed-in user's own playlists.
    pub async fn list_playlists(&self, token: &str) -> Result<Vec<Playlist>> {
        let url = format!("{}/playlists", self.base_url);
        let query = [
            ("part", "snippet".to_string()),
            ("mine", "true".to_string()),
            ("maxResults", MAX_RESULTS.to_string()),
        ];
        drain_authed(&self.client, &url, token, &query).await
    }

    pub async fn list_playlist_items(
        &self,
        token: &str,
        playlist_id: &str,
    ) -> Result<Vec<PlaylistItem>> {
        let url = format!("{}/playlistItems", self.base_url);
        let query = [
            ("part", "snippet".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", MAX_RESULTS.to_string()),
        ];
        drain_authed(&self.client, &url, token, &query).await
    }
}

//! NASA Astronomy Picture of the Day

use reqwest::Client;

use crate::client::AuthedClient;
use crate::error::Result;
use crate::types::AstronomyPicture;

use super::normalize_base;

pub const APOD_API_BASE: &str = "https://api.nasa.gov/planetary";

#[derive(Debug, Clone)]
pub struct ApodApi {
    client: AuthedClient,
    base_url: String,
}

impl ApodApi {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, APOD_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: AuthedClient::new(http, "apod"),
            base_url: normalize_base(base_url),
        }
    }

    pub async fn today(&self, api_key: &str) -> Result<AstronomyPicture> {
        let url = format!("{}/apod", self.base_url);
        self.client
            .public_get(&url, &[("api_key", api_key)])
            .await
    }
}

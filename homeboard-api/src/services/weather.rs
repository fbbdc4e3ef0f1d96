//! Open-Meteo current conditions (keyless)

use reqwest::Client;

use crate::client::AuthedClient;
use crate::error::Result;
use crate::types::WeatherReport;

use super::normalize_base;

pub const WEATHER_API_BASE: &str = "https://api.open-meteo.com/v1";

const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m,is_day";

#[derive(Debug, Clone)]
pub struct WeatherApi {
    client: AuthedClient,
    base_url: String,
}

impl WeatherApi {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, WEATHER_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            client: AuthedClient::new(http, "weather"),
            base_url: normalize_base(base_url),
        }
    }

    pub async fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherReport> {
        let url = format!("{}/forecast", self.base_url);
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];
        self.client.public_get(&url, &query).await
    }
}

//! Collaborator bundle sharing one HTTP client.

use reqwest::Client;

use crate::client::create_http_client;
use crate::services::{
    ApodApi, CalendarApi, DriveApi, PhotosPickerApi, TasksApi, WeatherApi, YoutubeApi,
};

/// Every REST collaborator the dashboard talks to.
#[derive(Debug, Clone)]
pub struct ApiSuite {
    pub calendar: CalendarApi,
    pub tasks: TasksApi,
    pub drive: DriveApi,
    pub photos: PhotosPickerApi,
    pub youtube: YoutubeApi,
    pub weather: WeatherApi,
    pub apod: ApodApi,
}

impl ApiSuite {
    /// Production endpoints over a freshly built client.
    pub fn new() -> Self {
        Self::with_client(&create_http_client())
    }

    /// Production endpoints over an existing client.
    pub fn with_client(http: &Client) -> Self {
        Self {
            calendar: CalendarApi::new(http.clone()),
            tasks: TasksApi::new(http.clone()),
            drive: DriveApi::new(http.clone()),
            photos: PhotosPickerApi::new(http.clone()),
            youtube: YoutubeApi::new(http.clone()),
            weather: WeatherApi::new(http.clone()),
            apod: ApodApi::new(http.clone()),
        }
    }

    /// Every collaborator pointed at one base URL (`<base>/calendar`, `<base>/tasks`, ...).
    ///
    /// Used to run the whole suite against a local mock server.
    pub fn with_base_url(http: &Client, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            calendar: CalendarApi::with_base_url(http.clone(), format!("{base}/calendar")),
            tasks: TasksApi::with_base_url(http.clone(), format!("{base}/tasks")),
            drive: DriveApi::with_base_url(http.clone(), format!("{base}/drive")),
            photos: PhotosPickerApi::with_base_url(http.clone(), format!("{base}/photos")),
            youtube: YoutubeApi::with_base_url(http.clone(), format!("{base}/youtube")),
            weather: WeatherApi::with_base_url(http.clone(), format!("{base}/weather")),
            apod: ApodApi::with_base_url(http.clone(), format!("{base}/apod")),
        }
    }
}

impl Default for ApiSuite {
    fn default() -> Self {
        Self::new()
    }
}

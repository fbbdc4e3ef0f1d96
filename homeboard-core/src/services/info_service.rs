//! Weather and astronomy picture data (no Google session needed)

use std::sync::Arc;

use homeboard_api::{AstronomyPicture, WeatherReport};

use crate::error::CoreResult;
use crate::services::{QueryCache, ServiceContext};

pub struct InfoService {
    ctx: Arc<ServiceContext>,
    weather: QueryCache<String, WeatherReport>,
    apod: QueryCache<String, AstronomyPicture>,
}

impl InfoService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let stale = ctx.settings.cache_stale;
        Self {
            ctx,
            weather: QueryCache::new(stale),
            apod: QueryCache::new(stale),
        }
    }

    pub async fn weather(&self) -> CoreResult<WeatherReport> {
        let ctx = Arc::clone(&self.ctx);
        let key = format!(
            "weather:{}:{}",
            self.ctx.settings.latitude, self.ctx.settings.longitude
        );
        self.weather
            .get_or_fetch(key, move || async move {
                let settings = &ctx.settings;
                Ok(ctx
                    .apis
                    .weather
                    .current(settings.latitude, settings.longitude)
                    .await?)
            })
            .await
    }

    pub async fn astronomy_picture(&self) -> CoreResult<AstronomyPicture> {
        let ctx = Arc::clone(&self.ctx);
        self.apod
            .get_or_fetch("apod:today".to_string(), move || async move {
                Ok(ctx.apis.apod.today(&ctx.settings.apod_api_key).await?)
            })
            .await
    }

    pub async fn invalidate(&self) {
        self.weather.invalidate_all().await;
        self.apod.invalidate_all().await;
    }
}

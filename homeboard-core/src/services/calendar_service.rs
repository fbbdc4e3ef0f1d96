//! Calendar widget data

use std::sync::Arc;

use chrono::Utc;
use homeboard_api::{CalendarEvent, TimeWindow};

use crate::error::CoreResult;
use crate::services::{QueryCache, ServiceContext};

const UPCOMING_KEY: &str = "calendar:upcoming";

pub struct CalendarService {
    ctx: Arc<ServiceContext>,
    cache: QueryCache<String, Vec<CalendarEvent>>,
}

impl CalendarService {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let cache = QueryCache::new(ctx.settings.cache_stale);
        Self { ctx, cache }
    }

    /// Upcoming events of every calendar, merged and sorted by start.
    ///
    /// Calendars whose events cannot be fetched are skipped.
    pub async fn upcoming_events(&self) -> CoreResult<Vec<CalendarEvent>> {
        let ctx = Arc::clone(&self.ctx);
        self.cache
            .get_or_fetch(UPCOMING_KEY.to_string(), move || async move {
                fetch_upcoming(&ctx).await
            })
            .await
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate_all().await;
    }
}

async fn fetch_upcoming(ctx: &ServiceContext) -> CoreResult<Vec<CalendarEvent>> {
    let token = ctx.access_token().await?;
    let calendars = ctx.apis.calendar.list_calendars(&token).await?;
    let ids: Vec<String> = calendars.into_iter().map(|c| c.id).collect();

    let window = TimeWindow::upcoming_days(Utc::now(), ctx.settings.calendar_days);
    let merged = ctx
        .apis
        .calendar
        .list_events_across(&token, &ids, &window)
        .await;

    if merged.all_failed() {
        log::warn!(
            "All {} calendar(s) failed to load, showing no events",
            merged.total
        );
    }

    Ok(merged.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{mock_context, signed_out_context};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn merges_calendars_and_skips_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/users/me/calendarList"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{ "id": "a" }, { "id": "b" }]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/calendar/calendars/a/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    { "id": "late", "start": { "dateTime": "2030-01-02T10:00:00Z" } },
                    { "id": "early", "start": { "date": "2030-01-01" } }
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/calendar/calendars/b/events"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let svc = CalendarService::new(mock_context(&server.uri()));
        let events = svc.upcoming_events().await.unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);

        // 第二次读取命中缓存（calendarList 只被请求一次）
        svc.upcoming_events().await.unwrap();
    }

    #[tokio::test]
    async fn signed_out_is_auth_required() {
        let svc = CalendarService::new(signed_out_context());
        assert!(matches!(
            svc.upcoming_events().await,
            Err(CoreError::AuthRequired)
        ));
    }

    #[tokio::test]
    async fn calendar_list_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;

        let svc = CalendarService::new(mock_context(&server.uri()));
        let err = svc.upcoming_events().await.unwrap_err();
        assert!(matches!(err, CoreError::Api(_)));
    }
}

//! 各分区的内容渲染

mod calendar;
mod info;
mod media;
mod tasks;

use ratatui::{layout::Rect, Frame};

use crate::model::{App, ZoneId};

/// 渲染分区边框内部的内容
pub fn render(app: &App, zone: ZoneId, frame: &mut Frame, area: Rect) {
    match zone {
        ZoneId::Calendar => calendar::render(&app.calendar, frame, area),
        ZoneId::Tasks => tasks::render(&app.tasks, frame, area),
        ZoneId::Photos => media::render_photos(&app.photos, frame, area),
        ZoneId::Music => media::render_music(&app.music, frame, area),
        ZoneId::Weather => info::render_weather(&app.weather, frame, area),
        ZoneId::Astronomy => info::render_astronomy(&app.astronomy, frame, area),
    }
}

//! Weather / Astronomy 分区渲染

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use homeboard_core::types::LoadState;

use crate::model::widgets::{AstronomyWidget, WeatherWidget};
use crate::view::theme::Styles;

/// Placeholder lines for data that is not ready.
fn pending_lines<T>(state: &LoadState<T>, noun: &str) -> Vec<Line<'static>> {
    match state {
        LoadState::Idle | LoadState::Ready(_) => Vec::new(),
        LoadState::Loading => vec![Line::from(Span::styled("Loading...", Styles::muted()))],
        LoadState::Failed(_) => vec![Line::from(Span::styled(
            format!("Could not load {noun}"),
            Styles::error(),
        ))],
    }
}

pub fn render_weather(widget: &WeatherWidget, frame: &mut Frame, area: Rect) {
    let lines = match widget.report().data() {
        Some(report) => {
            let current = &report.current;
            vec![
                Line::from(Span::styled(
                    format!("{:.0}°C  {}", current.temperature_2m, current.condition()),
                    Styles::title(),
                )),
                Line::from(Span::styled(
                    format!("Wind {:.0} km/h", current.wind_speed_10m),
                    Styles::text(),
                )),
                Line::from(Span::styled(
                    format!(
                        "{:.2}, {:.2}  {}",
                        report.latitude, report.longitude, report.timezone
                    ),
                    Styles::muted(),
                )),
            ]
        }
        None => pending_lines(widget.report(), "weather"),
    };
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_astronomy(widget: &AstronomyWidget, frame: &mut Frame, area: Rect) {
    let lines = match widget.picture().data() {
        Some(picture) => {
            let mut lines = vec![
                Line::from(Span::styled(picture.title.clone(), Styles::title())),
                Line::from(Span::styled(
                    match &picture.copyright {
                        Some(owner) => format!("{}  © {}", picture.date, owner.trim()),
                        None => picture.date.clone(),
                    },
                    Styles::muted(),
                )),
                Line::from(Span::styled(
                    picture.hdurl.clone().unwrap_or_else(|| picture.url.clone()),
                    Styles::text(),
                )),
            ];
            if widget.shows_explanation() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    picture.explanation.clone(),
                    Styles::text(),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "Enter: explanation",
                    Styles::muted(),
                )));
            }
            lines
        }
        None => pending_lines(widget.picture(), "astronomy picture"),
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

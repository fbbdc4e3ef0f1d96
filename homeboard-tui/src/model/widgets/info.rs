//! Weather / Astronomy 分区

use homeboard_core::types::{AstronomyPicture, LoadState, WeatherReport};
use homeboard_core::CoreResult;

use super::ZoneWidget;
use crate::event::NavKey;
use crate::message::WidgetCommand;
use crate::model::ZoneId;

#[derive(Debug, Default)]
pub struct WeatherWidget {
    report: LoadState<WeatherReport>,
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> &LoadState<WeatherReport> {
        &self.report
    }

    pub fn load(&mut self) -> Vec<WidgetCommand> {
        self.report = LoadState::Loading;
        vec![WidgetCommand::LoadZone(ZoneId::Weather)]
    }

    pub fn set_report(&mut self, result: CoreResult<WeatherReport>) {
        self.report = result.into();
    }
}

impl ZoneWidget for WeatherWidget {
    fn on_activate(&mut self) -> Vec<WidgetCommand> {
        if matches!(self.report, LoadState::Failed(_)) {
            return self.load();
        }
        Vec::new()
    }

    fn on_deactivate(&mut self) -> Vec<WidgetCommand> {
        Vec::new()
    }

    fn handle_key(&mut self, _key: NavKey) -> Vec<WidgetCommand> {
        Vec::new()
    }
}

#[derive(Debug, Default)]
pub struct AstronomyWidget {
    picture: LoadState<AstronomyPicture>,
    show_explanation: bool,
}

impl AstronomyWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn picture(&self) -> &LoadState<AstronomyPicture> {
        &self.picture
    }

    pub fn shows_explanation(&self) -> bool {
        self.show_explanation
    }

    pub fn load(&mut self) -> Vec<WidgetCommand> {
        self.picture = LoadState::Loading;
        vec![WidgetCommand::LoadZone(ZoneId::Astronomy)]
    }

    pub fn set_picture(&mut self, result: CoreResult<AstronomyPicture>) {
        self.picture = result.into();
    }
}

impl ZoneWidget for AstronomyWidget {
    fn on_activate(&mut self) -> Vec<WidgetCommand> {
        if matches!(self.picture, LoadState::Failed(_)) {
            return self.load();
        }
        Vec::new()
    }

    fn on_deactivate(&mut self) -> Vec<WidgetCommand> {
        self.show_explanation = false;
        Vec::new()
    }

    fn handle_key(&mut self, key: NavKey) -> Vec<WidgetCommand> {
        if key == NavKey::Enter && self.picture.is_loaded() {
            self.show_explanation = !self.show_explanation;
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture() -> AstronomyPicture {
        AstronomyPicture {
            date: "2024-05-01".into(),
            title: "Pillars".into(),
            explanation: "Gas and dust.".into(),
            url: "https://apod.example/p.jpg".into(),
            hdurl: None,
            media_type: "image".into(),
            copyright: None,
        }
    }

    #[test]
    fn enter_toggles_explanation() {
        let mut widget = AstronomyWidget::new();
        widget.handle_key(NavKey::Enter);
        assert!(!widget.shows_explanation());

        widget.set_picture(Ok(picture()));
        widget.handle_key(NavKey::Enter);
        assert!(widget.shows_explanation());
        widget.on_deactivate();
        assert!(!widget.shows_explanation());
    }

    #[test]
    fn weather_ignores_keys() {
        let mut widget = WeatherWidget::new();
        assert!(widget.handle_key(NavKey::Enter).is_empty());
        assert!(widget.report().data().is_none());
    }
}

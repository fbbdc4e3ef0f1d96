//! 应用主状态结构

use super::widgets::{
    AstronomyWidget, CalendarWidget, MusicWidget, PhotosWidget, TasksWidget, WeatherWidget,
    ZoneWidget,
};
use super::{ZoneFocus, ZoneId};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 分区焦点控制器（整页唯一）
    pub focus: ZoneFocus,

    /// 会话不可用：显示登录提示，不再发起远程请求
    pub auth_required: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 外部播放器正在播放的曲目
    pub now_playing: Option<String>,

    // === 各分区状态 ===
    pub calendar: CalendarWidget,
    pub tasks: TasksWidget,
    pub photos: PhotosWidget,
    pub music: MusicWidget,
    pub weather: WeatherWidget,
    pub astronomy: AstronomyWidget,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: ZoneFocus::new(ZoneId::ALL.len()),
            auth_required: false,
            status_message: None,
            now_playing: None,
            calendar: CalendarWidget::new(),
            tasks: TasksWidget::new(),
            photos: PhotosWidget::new(),
            music: MusicWidget::new(),
            weather: WeatherWidget::new(),
            astronomy: AstronomyWidget::new(),
        }
    }

    pub fn widget(&self, zone: ZoneId) -> &dyn ZoneWidget {
        match zone {
            ZoneId::Calendar => &self.calendar,
            ZoneId::Tasks => &self.tasks,
            ZoneId::Photos => &self.photos,
            ZoneId::Music => &self.music,
            ZoneId::Weather => &self.weather,
            ZoneId::Astronomy => &self.astronomy,
        }
    }

    pub fn widget_mut(&mut self, zone: ZoneId) -> &mut dyn ZoneWidget {
        match zone {
            ZoneId::Calendar => &mut self.calendar,
            ZoneId::Tasks => &mut self.tasks,
            ZoneId::Photos => &mut self.photos,
            ZoneId::Music => &mut self.music,
            ZoneId::Weather => &mut self.weather,
            ZoneId::Astronomy => &mut self.astronomy,
        }
    }

    /// The zone that currently receives forwarded keys.
    pub fn active_zone(&self) -> Option<ZoneId> {
        self.focus.active_zone().and_then(ZoneId::from_index)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

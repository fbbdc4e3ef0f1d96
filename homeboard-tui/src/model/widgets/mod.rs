//! 分区组件状态
//!
//! 每个分区实现 `ZoneWidget`，由 `InputRouter` 在激活、退出激活和按键时调用。

mod calendar;
mod info;
mod music;
mod photos;
mod picker;
mod tasks;

pub use calendar::CalendarWidget;
pub use info::{AstronomyWidget, WeatherWidget};
pub use music::MusicWidget;
pub use photos::PhotosWidget;
pub use picker::{Picker, PickerEvent, PickerItem};
pub use tasks::TasksWidget;

use crate::event::NavKey;
use crate::message::WidgetCommand;

/// Navigation hooks of one dashboard zone.
pub trait ZoneWidget {
    /// The zone just became active.
    fn on_activate(&mut self) -> Vec<WidgetCommand>;

    /// The zone stopped being active (Escape, or another zone was activated).
    fn on_deactivate(&mut self) -> Vec<WidgetCommand>;

    /// Whether Escape closes something inside the zone instead of deactivating it.
    fn captures_escape(&self) -> bool {
        false
    }

    /// A key forwarded while the zone is active.
    fn handle_key(&mut self, key: NavKey) -> Vec<WidgetCommand>;
}

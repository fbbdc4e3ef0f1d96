//! Photos 分区：Drive 文件夹或 Google Photos 选择 + 照片查看

use homeboard_core::types::{DriveFile, SelectionKey};

use super::{Picker, PickerEvent, ZoneWidget};
use crate::event::NavKey;
use crate::message::WidgetCommand;
use crate::model::ZoneId;

#[derive(Debug)]
pub struct PhotosWidget {
    pub picker: Picker<DriveFile, DriveFile>,
    /// 正在查看的照片（内容行下标）
    viewer: Option<usize>,
}

impl Default for PhotosWidget {
    fn default() -> Self {
        Self {
            picker: Picker::new(ZoneId::Photos, SelectionKey::PhotoFolder),
            viewer: None,
        }
    }
}

impl PhotosWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewer(&self) -> Option<usize> {
        self.viewer
    }

    /// Photo currently shown in the viewer.
    pub fn viewed_photo(&self) -> Option<&DriveFile> {
        let index = self.viewer?;
        self.picker.content().data()?.get(index)
    }

    fn photo_count(&self) -> usize {
        self.picker.content().data().map_or(0, Vec::len)
    }

    /// Drop the viewer when the content it pointed into changed.
    pub fn content_changed(&mut self) {
        if self.viewer.is_some_and(|i| i >= self.photo_count()) {
            self.viewer = None;
        }
    }

    fn handle_viewer_key(&mut self, index: usize, key: NavKey) -> bool {
        let count = self.photo_count();
        match key {
            NavKey::Escape => self.viewer = None,
            NavKey::Left if index > 0 => self.viewer = Some(index - 1),
            NavKey::Right if index + 1 < count => self.viewer = Some(index + 1),
            NavKey::Left | NavKey::Right => {}
            _ => return false,
        }
        true
    }
}

impl ZoneWidget for PhotosWidget {
    fn on_activate(&mut self) -> Vec<WidgetCommand> {
        self.picker.activate();
        Vec::new()
    }

    fn on_deactivate(&mut self) -> Vec<WidgetCommand> {
        self.viewer = None;
        self.picker.deactivate();
        Vec::new()
    }

    fn captures_escape(&self) -> bool {
        self.viewer.is_some() || self.picker.is_menu_open()
    }

    fn handle_key(&mut self, key: NavKey) -> Vec<WidgetCommand> {
        if let Some(index) = self.viewer {
            if self.handle_viewer_key(index, key) {
                return Vec::new();
            }
        }

        match self.picker.handle_key(key) {
            PickerEvent::Handled(commands) => {
                self.content_changed();
                commands
            }
            PickerEvent::ContentEnter(index) => {
                self.viewer = Some(index);
                Vec::new()
            }
            PickerEvent::Unhandled => Vec::new(),
        }
    }
}

//! Music 分区：YouTube 播放列表 + 外部播放器

use homeboard_core::types::{Playlist, PlaylistItem, SelectionKey};

use super::{Picker, PickerEvent, PickerItem, ZoneWidget};
use crate::event::NavKey;
use crate::message::WidgetCommand;
use crate::model::ZoneId;

#[derive(Debug, Clone, PartialEq, Eq)]
struct NowPlaying {
    playlist_id: String,
    index: usize,
}

#[derive(Debug)]
pub struct MusicWidget {
    pub picker: Picker<Playlist, PlaylistItem>,
    playing: Option<NowPlaying>,
    paused: bool,
}

impl Default for MusicWidget {
    fn default() -> Self {
        Self {
            picker: Picker::new(ZoneId::Music, SelectionKey::Playlist),
            playing: None,
            paused: false,
        }
    }
}

impl MusicWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether content row `index` of the shown playlist is the current track.
    pub fn is_playing(&self, index: usize) -> bool {
        self.playing_index() == Some(index)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn playing_index(&self) -> Option<usize> {
        let playing = self.playing.as_ref()?;
        let selected = self.picker.selected()?;
        (selected.id == playing.playlist_id).then_some(playing.index)
    }

    fn start(&mut self, index: usize) -> Vec<WidgetCommand> {
        let Some(playlist_id) = self.picker.selected().map(|s| s.id.clone()) else {
            return Vec::new();
        };
        let Some(track) = self.picker.content().data().and_then(|items| items.get(index)) else {
            return Vec::new();
        };
        let Some(url) = track.watch_url() else {
            log::warn!("Track {} has no video id, skipping", track.item_id());
            return Vec::new();
        };
        let title = track.label().to_string();

        self.playing = Some(NowPlaying { playlist_id, index });
        self.paused = false;
        vec![WidgetCommand::Play { title, url }]
    }

    /// The player could not start or exited.
    pub fn stop(&mut self) {
        self.playing = None;
        self.paused = false;
    }
}

impl ZoneWidget for MusicWidget {
    fn on_activate(&mut self) -> Vec<WidgetCommand> {
        self.picker.activate();
        Vec::new()
    }

    fn on_deactivate(&mut self) -> Vec<WidgetCommand> {
        self.picker.deactivate();
        Vec::new()
    }

    fn captures_escape(&self) -> bool {
        self.picker.is_menu_open()
    }

    fn handle_key(&mut self, key: NavKey) -> Vec<WidgetCommand> {
        if matches!(key, NavKey::Space | NavKey::PlayPause) {
            if self.playing.is_none() {
                return Vec::new();
            }
            self.paused = !self.paused;
            return vec![WidgetCommand::TogglePause];
        }

        match self.picker.handle_key(key) {
            PickerEvent::Handled(commands) => commands,
            // 在正在播放的曲目上按 Enter 切到下一首
            PickerEvent::ContentEnter(index) if self.is_playing(index) => {
                let count = self.picker.content().data().map_or(0, Vec::len);
                if index + 1 < count {
                    self.start(index + 1)
                } else {
                    Vec::new()
                }
            }
            PickerEvent::ContentEnter(index) => self.start(index),
            PickerEvent::Unhandled => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeboard_core::types::Selection;

    use homeboard_api::{PlaylistItemSnippet, ResourceId};

    fn track(id: &str) -> PlaylistItem {
        PlaylistItem {
            id: id.into(),
            snippet: PlaylistItemSnippet {
                title: format!("Song {id}"),
                video_owner_channel_title: None,
                resource_id: ResourceId {
                    video_id: Some(id.into()),
                },
            },
        }
    }

    fn loaded() -> MusicWidget {
        let mut widget = MusicWidget::new();
        widget.on_activate();
        widget.picker.restore(Selection::new("p1", "Chill"));
        widget
            .picker
            .set_content("p1", Ok(vec![track("a"), track("b")]));
        widget
    }

    #[test]
    fn enter_plays_then_advances() {
        let mut widget = loaded();
        widget.handle_key(NavKey::Down);

        assert_eq!(
            widget.handle_key(NavKey::Enter),
            vec![WidgetCommand::Play {
                title: "Song a".into(),
                url: "https://www.youtube.com/watch?v=a".into(),
            }]
        );
        assert!(widget.is_playing(0));

        let next = widget.handle_key(NavKey::Enter);
        assert!(matches!(&next[..], [WidgetCommand::Play { title, .. }] if title == "Song b"));
        assert!(widget.is_playing(1));
    }

    #[test]
    fn space_toggles_pause_only_while_playing() {
        let mut widget = loaded();
        assert!(widget.handle_key(NavKey::Space).is_empty());

        widget.handle_key(NavKey::Down);
        widget.handle_key(NavKey::Enter);
        assert_eq!(
            widget.handle_key(NavKey::PlayPause),
            vec![WidgetCommand::TogglePause]
        );
        assert!(widget.is_paused());
        widget.handle_key(NavKey::Space);
        assert!(!widget.is_paused());
    }

    #[test]
    fn stop_clears_now_playing() {
        let mut widget = loaded();
        widget.handle_key(NavKey::Down);
        widget.handle_key(NavKey::Enter);
        widget.stop();
        assert!(!widget.is_playing(0));
    }
}

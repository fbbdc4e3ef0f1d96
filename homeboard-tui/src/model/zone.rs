//! 仪表盘分区

use homeboard_core::types::SelectionKey;

/// The dashboard zones, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneId {
    Calendar,
    Tasks,
    Photos,
    Music,
    Weather,
    Astronomy,
}

impl ZoneId {
    pub const ALL: [Self; 6] = [
        Self::Calendar,
        Self::Tasks,
        Self::Photos,
        Self::Music,
        Self::Weather,
        Self::Astronomy,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Calendar => 0,
            Self::Tasks => 1,
            Self::Photos => 2,
            Self::Music => 3,
            Self::Weather => 4,
            Self::Astronomy => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Calendar => "Calendar",
            Self::Tasks => "Tasks",
            Self::Photos => "Photos",
            Self::Music => "Music",
            Self::Weather => "Weather",
            Self::Astronomy => "Astronomy",
        }
    }

    /// Key of the persisted selection, for zones that have a submenu.
    pub fn selection_key(self) -> Option<SelectionKey> {
        match self {
            Self::Tasks => Some(SelectionKey::TaskList),
            Self::Photos => Some(SelectionKey::PhotoFolder),
            Self::Music => Some(SelectionKey::Playlist),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for zone in ZoneId::ALL {
            assert_eq!(ZoneId::from_index(zone.index()), Some(zone));
        }
        assert_eq!(ZoneId::from_index(ZoneId::ALL.len()), None);
    }

    #[test]
    fn only_picker_zones_persist_selections() {
        let keyed: Vec<ZoneId> = ZoneId::ALL
            .into_iter()
            .filter(|z| z.selection_key().is_some())
            .collect();
        assert_eq!(keyed, vec![ZoneId::Tasks, ZoneId::Photos, ZoneId::Music]);
    }
}

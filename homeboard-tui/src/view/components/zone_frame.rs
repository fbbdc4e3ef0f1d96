//! 分区边框

use ratatui::{
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::model::ZoneId;
use crate::view::theme::Styles;

pub fn block(zone: ZoneId, focused: bool, active: bool) -> Block<'static> {
    let (style, border_type, marker) = if active {
        (Styles::border_active(), BorderType::Thick, "● ")
    } else if focused {
        (Styles::border_focused(), BorderType::Rounded, "○ ")
    } else {
        (Styles::border(), BorderType::Rounded, "")
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style)
        .title(Span::styled(
            format!(" {marker}{} ", zone.title()),
            Styles::title(),
        ))
}

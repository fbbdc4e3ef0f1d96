//! Calendar 分区渲染

use chrono::Local;
use homeboard_core::types::CalendarEvent;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use crate::model::widgets::CalendarWidget;
use crate::util::text::fit;
use crate::view::components::rows;
use crate::view::theme::Styles;

pub fn render(widget: &CalendarWidget, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width);
    let mut items = vec![ListItem::new(Span::styled("Upcoming", Styles::title()))];

    if let Some(events) = widget.events().data() {
        items.extend(events.iter().map(|event| event_item(event, width)));
    }
    items.extend(rows::status_line(widget.events(), "events"));

    rows::render(frame, area, items, widget.cursor().cursor());
}

fn event_item(event: &CalendarEvent, width: usize) -> ListItem<'static> {
    let when = match event.start.instant() {
        Some(start) if event.start.is_all_day() => start.format("%a %d %b").to_string(),
        Some(start) => start.with_timezone(&Local).format("%a %d %b %H:%M").to_string(),
        None => String::from("--"),
    };
    let summary = if event.summary.is_empty() {
        "(no title)"
    } else {
        event.summary.as_str()
    };
    let room = width.saturating_sub(when.chars().count() + 2);

    ListItem::new(Line::from(vec![
        Span::styled(when, Styles::muted()),
        Span::raw("  "),
        Span::styled(fit(summary, room), Styles::text()),
    ]))
}

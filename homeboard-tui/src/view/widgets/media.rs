//! Photos / Music 分区渲染

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use homeboard_core::types::DriveFile;

use crate::model::widgets::{MusicWidget, PhotosWidget, PickerItem};
use crate::util::text::fit;
use crate::view::components::rows;
use crate::view::theme::Styles;

pub fn render_photos(widget: &PhotosWidget, frame: &mut Frame, area: Rect) {
    if let Some(photo) = widget.viewed_photo() {
        render_viewer(widget, photo, frame, area);
        return;
    }

    let width = usize::from(area.width);
    let items = rows::picker_items(&widget.picker, width, ("folders", "photos"), |_, photo| {
        Line::from(Span::styled(
            fit(&format!("  {}", photo.label()), width),
            Styles::text(),
        ))
    });
    rows::render(frame, area, items, widget.picker.cursor().cursor());
}

fn render_viewer(widget: &PhotosWidget, photo: &DriveFile, frame: &mut Frame, area: Rect) {
    let count = widget.picker.content().data().map_or(0, Vec::len);
    let position = widget.viewer().map_or(0, |i| i + 1);
    let link = photo
        .web_content_link
        .as_deref()
        .or(photo.thumbnail_link.as_deref())
        .unwrap_or("(no link)");

    let lines = vec![
        Line::from(Span::styled(photo.name.clone(), Styles::title())),
        Line::from(Span::styled(
            format!("{position} / {count}  {}", photo.mime_type),
            Styles::muted(),
        )),
        Line::default(),
        Line::from(Span::styled(link.to_string(), Styles::text())),
        Line::default(),
        Line::from(Span::styled("←/→ browse  Esc close", Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_music(widget: &MusicWidget, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width);
    let items = rows::picker_items(&widget.picker, width, ("playlists", "tracks"), |i, track| {
        let (mark, style) = match (widget.is_playing(i), widget.is_paused()) {
            (true, true) => ("⏸ ", Styles::success()),
            (true, false) => ("▶ ", Styles::success()),
            _ => ("  ", Styles::text()),
        };
        Line::from(vec![
            Span::styled(mark, style),
            Span::styled(fit(track.label(), width.saturating_sub(2)), style),
        ])
    });
    rows::render(frame, area, items, widget.picker.cursor().cursor());
}

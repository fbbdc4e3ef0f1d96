//! Tasks 分区渲染

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use crate::model::widgets::TasksWidget;
use crate::util::text::fit;
use crate::view::components::rows;
use crate::view::theme::Styles;

pub fn render(widget: &TasksWidget, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width);
    let items = rows::picker_items(&widget.picker, width, ("task lists", "tasks"), |_, task| {
        let checked = widget.is_checked(task);
        let (mark, style) = if checked {
            ("[x] ", Styles::muted())
        } else {
            ("[ ] ", Styles::text())
        };
        Line::from(vec![
            Span::styled(mark, style),
            Span::styled(fit(&task.title, width.saturating_sub(4)), style),
        ])
    });
    rows::render(frame, area, items, widget.picker.cursor().cursor());
}

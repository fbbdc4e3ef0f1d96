//! 主布局

use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, ZoneId};
use crate::view::components::{banner, statusbar, zone_frame};
use crate::view::theme::Styles;
use crate::view::widgets;

/// 渲染整个界面，返回各分区的区域（按 `ZoneId` 顺序；显示登录提示时为空）
pub fn render(app: &App, frame: &mut Frame) -> Vec<Rect> {
    let [title_area, body, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_title(frame, title_area);

    let areas = if app.auth_required {
        banner::render(frame, body);
        Vec::new()
    } else {
        let areas = zone_areas(body);
        for (zone, area) in ZoneId::ALL.into_iter().zip(areas.iter().copied()) {
            let block = zone_frame::block(
                zone,
                app.focus.is_focused(zone.index()),
                app.focus.is_zone_active(zone.index()),
            );
            let inner = block.inner(area);
            frame.render_widget(block, area);
            widgets::render(app, zone, frame, inner);
        }
        areas
    };

    statusbar::render(app, frame, status_area);
    areas
}

/// 3 列 × 2 行的分区网格
pub fn zone_areas(body: Rect) -> Vec<Rect> {
    let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).split(body);
    rows.iter()
        .flat_map(|row| {
            Layout::horizontal([Constraint::Ratio(1, 3); 3])
                .split(*row)
                .to_vec()
        })
        .collect()
}

fn render_title(frame: &mut Frame, area: Rect) {
    let now = Local::now().format("%A %d %B  %H:%M").to_string();
    let line = Line::from(vec![
        Span::styled(" Homeboard ", Styles::title()),
        Span::styled(now, Styles::muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

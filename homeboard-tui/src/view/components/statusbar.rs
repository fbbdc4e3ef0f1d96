//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, ZoneId};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref title) = app.now_playing {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        let icon = if app.music.is_paused() { "⏸ " } else { "♪ " };
        spans.push(Span::styled(format!("{icon}{title}"), Styles::success()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.auth_required {
        return vec![("q", "Quit")];
    }

    let mut hints = Vec::new();
    match app.active_zone() {
        None => {
            hints.push(("←↑↓→", "Move"));
            if app.focus.focused().is_some() {
                hints.push(("Enter", "Open"));
                hints.push(("Esc", "Unfocus"));
            }
        }
        Some(zone) => {
            hints.push(("↑↓", "Rows"));
            hints.push(("Enter", "Select"));
            hints.push(("Esc", "Back"));
            if zone == ZoneId::Music {
                hints.push(("Space", "Pause"));
            }
        }
    }
    hints.push(("r", "Refresh"));
    hints.push(("s", "Sign out"));
    hints.push(("q", "Quit"));
    hints
}

//! 登录提示

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::view::theme::Styles;

pub fn render(frame: &mut Frame, area: Rect) {
    let [vertical] = Layout::vertical([Constraint::Length(8)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Max(64)])
        .flex(Flex::Center)
        .areas(vertical);

    let lines = vec![
        Line::from(Span::styled("Sign-in required", Styles::title())),
        Line::default(),
        Line::from("Your Google session is missing or could not be refreshed."),
        Line::from(vec![
            Span::raw("Run "),
            Span::styled("homeboard sign-in <refresh-token>", Styles::hint_key()),
            Span::raw(" and restart."),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Styles::border_active()),
        );
    frame.render_widget(paragraph, centered);
}

//! 行列表渲染
//!
//! 分区内容统一渲染为 List，光标所在行高亮。
//! 状态行（加载中、加载失败、空列表）追加在末尾，光标不会落在上面。

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use homeboard_core::types::LoadState;

use crate::model::widgets::{Picker, PickerItem};
use crate::util::text::fit;
use crate::view::theme::Styles;

pub fn render(frame: &mut Frame, area: Rect, items: Vec<ListItem<'static>>, cursor: Option<usize>) {
    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default().with_selected(cursor);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Muted trailing line describing a data state that has no rows.
pub fn status_line<T>(state: &LoadState<Vec<T>>, noun: &str) -> Option<ListItem<'static>> {
    match state {
        LoadState::Idle => None,
        LoadState::Loading => Some(ListItem::new(Span::styled("  Loading...", Styles::muted()))),
        LoadState::Failed(_) => Some(ListItem::new(Span::styled(
            format!("  Could not load {noun}"),
            Styles::error(),
        ))),
        LoadState::Ready(items) if items.is_empty() => Some(ListItem::new(Span::styled(
            format!("  No {noun}"),
            Styles::muted(),
        ))),
        LoadState::Ready(_) => None,
    }
}

/// Header, submenu and content rows of a picker.
pub fn picker_items<S, C>(
    picker: &Picker<S, C>,
    width: usize,
    nouns: (&str, &str),
    content_line: impl Fn(usize, &C) -> Line<'static>,
) -> Vec<ListItem<'static>>
where
    S: PickerItem,
{
    let (menu_noun, content_noun) = nouns;
    let mut items = Vec::new();

    let arrow = if picker.is_menu_open() { "▾" } else { "▸" };
    let header = match (picker.menu(), picker.selected()) {
        (LoadState::Loading, _) if picker.is_menu_open() => format!("{arrow} Loading {menu_noun}..."),
        (LoadState::Failed(_), _) if picker.is_menu_open() => {
            format!("{arrow} Could not load {menu_noun}")
        }
        (_, Some(selection)) => format!("{arrow} {}", selection.name),
        (_, None) => format!("{arrow} Choose from {menu_noun}"),
    };
    items.push(ListItem::new(Span::styled(
        fit(&header, width),
        Styles::title(),
    )));

    if picker.is_menu_open() {
        if let Some(menu) = picker.menu().data() {
            for entry in menu {
                let marker = if picker.selected().is_some_and(|s| s.id == entry.item_id()) {
                    "  • "
                } else {
                    "    "
                };
                items.push(ListItem::new(Span::styled(
                    fit(&format!("{marker}{}", entry.label()), width),
                    Styles::text(),
                )));
            }
        }
    }

    if let Some(content) = picker.content().data() {
        items.extend(
            content
                .iter()
                .enumerate()
                .map(|(i, item)| ListItem::new(content_line(i, item))),
        );
    }
    if picker.selected().is_some() {
        items.extend(status_line(picker.content(), content_noun));
    }

    items
}

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::super::view::OverlayRender;
use super::layout::popup_rect;

pub fn render_overlay(frame: &mut Frame<'_>, overlay: &OverlayRender<'_>) {
    match overlay {
        OverlayRender::Prompt { title, buffer } => render_prompt(frame, title, buffer),
        OverlayRender::List {
            title,
            items,
            selected,
        } => render_list(frame, title, items, *selected),
    }
}

fn render_prompt(frame: &mut Frame<'_>, title: &str, buffer: &str) {
    let width_limit = frame.area().width.saturating_sub(2).max(1);
    let width = (buffer.width() as u16)
        .saturating_add(6)
        .max(40)
        .min(width_limit);
    let area = popup_rect(frame.area(), width, 3);
    frame.render_widget(Clear, area);

    let prompt =
        Paragraph::new(buffer).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(prompt, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(buffer.width() as u16)
        .min(area.x + area.width.saturating_sub(2));
    frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
}

fn render_list(frame: &mut Frame<'_>, title: &str, items: &[&str], selected: usize) {
    if items.is_empty() {
        return;
    }
    let max_width = items.iter().map(|item| item.width()).max().unwrap_or(10) as u16;
    let width_limit = frame.area().width.saturating_sub(2).max(1);
    let width = max_width.saturating_add(6).min(width_limit);
    let height = (items.len().saturating_add(2) as u16).min(frame.area().height);
    let area = popup_rect(frame.area(), width.max(24), height.max(3));
    frame.render_widget(Clear, area);

    let entries: Vec<ListItem<'_>> = items.iter().map(|item| ListItem::new(*item)).collect();
    let mut state = ListState::default();
    state.select(Some(selected.min(items.len().saturating_sub(1))));

    let list = List::new(entries)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

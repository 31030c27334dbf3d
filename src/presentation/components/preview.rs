use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{form::FillState, registry::RecentSubmissions};

use super::submissions::render_submissions;

pub fn render_preview(
    frame: &mut Frame<'_>,
    area: Rect,
    fill: Option<&FillState>,
    recent: Option<&RecentSubmissions<'_>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_fields(frame, chunks[0], fill);
    render_submissions(frame, chunks[1], recent);
}

fn render_fields(frame: &mut Frame<'_>, area: Rect, fill: Option<&FillState>) {
    let Some(fill) = fill else {
        let placeholder = Paragraph::new("No form rendered. Ctrl+P previews the current draft.")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    };

    let block = Block::default()
        .title(fill.title.clone())
        .borders(Borders::ALL);
    if fill.is_empty() {
        let placeholder = Paragraph::new("This form has no fields").block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem<'_>> = fill
        .fields
        .iter()
        .map(|input| {
            let mut label = vec![Span::styled(
                input.field.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if input.field.required {
                label.push(Span::styled("*", Style::default().fg(Color::Red)));
            }
            label.push(Span::raw(format!(" [{}]: ", input.field.kind)));
            label.push(Span::raw(input.display_value()));

            let mut lines = vec![Line::from(label)];
            if let Some(error) = &input.error {
                lines.push(Line::from(Span::styled(
                    format!("  {error}"),
                    Style::default().fg(Color::Red),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(fill.focused.min(fill.fields.len().saturating_sub(1))));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

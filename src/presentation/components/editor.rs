use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use unicode_width::UnicodeWidthStr;

use crate::editor::{EditorFocus, FormDraft, RowColumn};

const COLUMN_TITLES: [&str; 4] = ["Field Name", "Type", "Mandatory", "Options"];

pub fn render_editor(
    frame: &mut Frame<'_>,
    area: Rect,
    draft: &FormDraft,
    enable_cursor: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_title(frame, chunks[0], draft, enable_cursor);
    render_rows(frame, chunks[1], draft);
}

fn render_title(frame: &mut Frame<'_>, area: Rect, draft: &FormDraft, enable_cursor: bool) {
    let focused = draft.focus == EditorFocus::Title;
    let block = Block::default()
        .title("Form Title")
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    let title = Paragraph::new(draft.title.as_str()).block(block);
    frame.render_widget(title, area);

    if focused && enable_cursor {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(draft.title.width() as u16)
            .min(area.x + area.width.saturating_sub(2));
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

fn render_rows(frame: &mut Frame<'_>, area: Rect, draft: &FormDraft) {
    let focus_cell = match draft.focus {
        EditorFocus::Title => None,
        EditorFocus::Cell { row, column } => Some((row, column)),
    };

    let header = Row::new(COLUMN_TITLES)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = draft.rows.iter().enumerate().map(|(index, field_row)| {
        let cells: Vec<Cell<'_>> = RowColumn::ORDER
            .into_iter()
            .map(|column| {
                let text = match column {
                    RowColumn::Name => field_row.name.clone(),
                    RowColumn::Kind => field_row.kind.label().to_string(),
                    RowColumn::Required => {
                        let label = if field_row.required { "True" } else { "False" };
                        label.to_string()
                    }
                    RowColumn::Options => field_row.options.clone(),
                };
                if focus_cell == Some((index, column)) {
                    Cell::from(text).style(
                        Style::default()
                            .add_modifier(Modifier::REVERSED)
                            .add_modifier(Modifier::UNDERLINED),
                    )
                } else if column == RowColumn::Options && !field_row.kind.uses_options() {
                    Cell::from(text).style(Style::default().add_modifier(Modifier::DIM))
                } else {
                    Cell::from(text)
                }
            })
            .collect();
        Row::new(cells)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(28),
            Constraint::Percentage(14),
            Constraint::Percentage(14),
            Constraint::Percentage(44),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("Fields ({})", draft.rows.len()))
            .borders(Borders::ALL),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("» ");

    let mut state = TableState::default();
    if let Some((row, _)) = focus_cell {
        state.select(Some(row));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

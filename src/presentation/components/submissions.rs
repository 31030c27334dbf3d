use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;

use crate::registry::RecentSubmissions;

pub fn render_submissions(
    frame: &mut Frame<'_>,
    area: Rect,
    recent: Option<&RecentSubmissions<'_>>,
) {
    let block = Block::default()
        .title(match recent {
            Some(recent) => format!("Recent Submissions ({} total)", recent.total),
            None => "Recent Submissions".to_string(),
        })
        .borders(Borders::ALL);

    let Some(recent) = recent.filter(|recent| !recent.entries.is_empty()) else {
        let placeholder = Paragraph::new("No submissions yet").block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let width = area.width.saturating_sub(4).max(16) as usize;
    let mut lines = Vec::new();
    for (number, submission) in recent.numbered() {
        let record = submission
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        for (index, wrapped) in wrap(&format!("{number}. {record}"), width)
            .into_iter()
            .enumerate()
        {
            let text = wrapped.into_owned();
            lines.push(if index == 0 {
                Line::from(text)
            } else {
                Line::from(format!("   {text}"))
            });
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

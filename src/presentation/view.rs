use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    app::Screen, editor::FormDraft, form::FillState, registry::RecentSubmissions,
};

use super::components::{render_editor, render_footer, render_overlay, render_preview};

pub(crate) struct UiContext<'a> {
    pub screen: Screen,
    pub draft: &'a FormDraft,
    pub fill: Option<&'a FillState>,
    pub recent: Option<RecentSubmissions<'a>>,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
    pub overlay: Option<OverlayRender<'a>>,
}

pub(crate) enum OverlayRender<'a> {
    Prompt { title: &'a str, buffer: &'a str },
    List {
        title: &'a str,
        items: Vec<&'a str>,
        selected: usize,
    },
}

pub(crate) fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    let cursor_enabled = ctx.overlay.is_none();
    match ctx.screen {
        Screen::Builder => render_editor(frame, chunks[0], ctx.draft, cursor_enabled),
        Screen::Preview => render_preview(frame, chunks[0], ctx.fill, ctx.recent.as_ref()),
    }
    render_footer(frame, chunks[1], &ctx);

    if let Some(overlay) = &ctx.overlay {
        render_overlay(frame, overlay);
    }
}

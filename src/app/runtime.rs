use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::{DefinitionError, FormDefinition},
    editor::FormDraft,
    form::{FillState, SubmitOutcome},
    io::{self, FileLoader, LoadEvent},
    presentation::{self, OverlayRender, UiContext},
    registry::FormRegistry,
};

use super::{options::UiOptions, status::StatusLine, terminal::TerminalGuard};

const BUILDER_HELP: &str = "Tab/Shift+Tab move • Ctrl+N add row • Ctrl+D delete row • \
     Ctrl+S save • Ctrl+O load file • Ctrl+L load saved • Ctrl+P preview • Ctrl+Q quit";
const PREVIEW_HELP: &str = "Tab/Shift+Tab move • Enter submit • Ctrl+E edit definition • \
     Ctrl+L load saved • Ctrl+Q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Builder,
    Preview,
}

#[derive(Debug, Clone)]
enum Overlay {
    FilePrompt { buffer: String },
    Picker { selected: usize },
}

pub(crate) struct App {
    registry: FormRegistry,
    draft: FormDraft,
    fill: Option<FillState>,
    screen: Screen,
    overlay: Option<Overlay>,
    status: StatusLine,
    options: UiOptions,
    loader: FileLoader,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(registry: FormRegistry, options: UiOptions) -> Self {
        Self {
            registry,
            draft: FormDraft::new(),
            fill: None,
            screen: Screen::Builder,
            overlay: None,
            status: StatusLine::new(),
            options,
            loader: FileLoader::new(),
            exit_armed: false,
            should_quit: false,
        }
    }

    /// Drive the event loop until the user quits, then hand the registry
    /// back as it stood.
    pub fn run(mut self) -> Result<FormRegistry> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(event) = self.loader.poll() {
                self.on_file_loaded(event);
                continue;
            }
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.registry)
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then(|| match self.screen {
            Screen::Builder => BUILDER_HELP,
            Screen::Preview => PREVIEW_HELP,
        });
        let recent = self
            .fill
            .as_ref()
            .filter(|_| self.screen == Screen::Preview)
            .and_then(|fill| self.registry.recent(&fill.title));
        let titles: Vec<&str> = self.registry.titles().collect();
        let overlay = self.overlay.as_ref().map(|overlay| match overlay {
            Overlay::FilePrompt { buffer } => OverlayRender::Prompt {
                title: "Load definition file",
                buffer: buffer.as_str(),
            },
            Overlay::Picker { selected } => OverlayRender::List {
                title: "Load saved form",
                items: titles.clone(),
                selected: *selected,
            },
        });

        presentation::draw(
            frame,
            UiContext {
                screen: self.screen,
                draft: &self.draft,
                fill: self.fill.as_ref(),
                recent,
                status_message: self.status.message(),
                dirty: self.draft.is_dirty(),
                error_count: self.fill.as_ref().map_or(0, FillState::error_count),
                help,
                overlay,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_overlay_key(&key) {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c')
                | KeyCode::Char('C') => self.on_exit(),
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.exit_armed = false;
                    self.on_save();
                }
                KeyCode::Char('o') | KeyCode::Char('O') => {
                    self.overlay = Some(Overlay::FilePrompt {
                        buffer: String::new(),
                    });
                    self.status.set_raw("Enter a file path and press Enter.");
                }
                KeyCode::Char('l') | KeyCode::Char('L') => {
                    if self.registry.is_empty() {
                        self.status.set_raw("No saved forms yet.");
                    } else {
                        self.overlay = Some(Overlay::Picker { selected: 0 });
                        self.status.set_raw("Use ↑/↓ and Enter to choose a form.");
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.screen = Screen::Builder;
                    self.draft.add_row();
                    self.status.editing(&self.draft.focus_label());
                }
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    if self.screen == Screen::Builder && self.draft.delete_focused_row() {
                        self.status.set_raw("Row deleted");
                    }
                }
                KeyCode::Char('p') | KeyCode::Char('P') => self.on_preview(),
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    self.screen = Screen::Builder;
                    self.status.ready();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCode::Tab => self.focus_delta(1),
            KeyCode::BackTab => self.focus_delta(-1),
            KeyCode::Up => self.focus_vertical(-1),
            KeyCode::Down => self.focus_vertical(1),
            KeyCode::Enter if self.screen == Screen::Preview => self.on_submit(),
            _ => self.handle_edit_key(&key),
        }
    }

    fn handle_overlay_key(&mut self, key: &KeyEvent) -> bool {
        let Some(mut overlay) = self.overlay.take() else {
            return false;
        };
        match &mut overlay {
            Overlay::FilePrompt { buffer } => match key.code {
                KeyCode::Esc => {
                    self.status.ready();
                    return true;
                }
                KeyCode::Enter => {
                    let path = buffer.trim().to_string();
                    if path.is_empty() {
                        self.status.report(DefinitionError::NoFileSelected);
                    } else {
                        self.status.reading(&path);
                        self.loader.spawn_read(PathBuf::from(path));
                    }
                    return true;
                }
                KeyCode::Char(ch) => {
                    if !key.modifiers.contains(KeyModifiers::CONTROL) {
                        buffer.push(ch);
                    }
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                _ => {}
            },
            Overlay::Picker { selected } => match key.code {
                KeyCode::Esc => {
                    self.status.ready();
                    return true;
                }
                KeyCode::Up => *selected = selected.saturating_sub(1),
                KeyCode::Down => {
                    *selected = (*selected + 1).min(self.registry.len().saturating_sub(1));
                }
                KeyCode::Enter => {
                    let title = self
                        .registry
                        .titles()
                        .nth(*selected)
                        .map(str::to_string);
                    if let Some(title) = title {
                        self.load_selected(&title);
                    }
                    return true;
                }
                _ => {}
            },
        }
        self.overlay = Some(overlay);
        true
    }

    fn focus_delta(&mut self, delta: i32) {
        self.exit_armed = false;
        match self.screen {
            Screen::Builder => self.draft.focus_delta(delta),
            Screen::Preview => {
                if let Some(fill) = self.fill.as_mut() {
                    fill.focus_delta(delta);
                }
            }
        }
    }

    fn focus_vertical(&mut self, delta: i32) {
        self.exit_armed = false;
        match self.screen {
            Screen::Builder => self.draft.focus_row_delta(delta),
            Screen::Preview => {
                if let Some(fill) = self.fill.as_mut() {
                    fill.focus_delta(delta);
                }
            }
        }
    }

    fn handle_edit_key(&mut self, key: &KeyEvent) {
        match self.screen {
            Screen::Builder => {
                if self.draft.handle_key(key) {
                    self.exit_armed = false;
                    self.status.editing(&self.draft.focus_label());
                }
            }
            Screen::Preview => {
                let Some(fill) = self.fill.as_mut() else {
                    return;
                };
                if let Some(input) = fill.focused_field_mut() {
                    if input.handle_key(key) {
                        let label = input.field.name.clone();
                        self.exit_armed = false;
                        self.status.editing(&label);
                    }
                }
            }
        }
    }

    /// Build the draft, record it in the registry, then write the file.
    /// The registry keeps the definition even when the write fails.
    fn on_save(&mut self) {
        match self.draft.build() {
            Ok(definition) => {
                let title = definition.title.clone();
                self.registry.insert(definition.clone());
                match io::export_definition(&definition, &self.options.export) {
                    Ok(path) => {
                        self.draft.mark_clean();
                        self.status.saved(&title, &path);
                    }
                    Err(err) => self.status.report(format!(
                        "\"{title}\" kept for this session, but writing failed: {err:#}"
                    )),
                }
            }
            Err(err) => self.status.report(err),
        }
    }

    /// Render the live form for the draft's title from the registry.
    fn on_preview(&mut self) {
        let title = self.draft.title.trim().to_string();
        if title.is_empty() {
            self.status.report(DefinitionError::MissingTitle);
            return;
        }
        let Some(definition) = self.registry.get(&title) else {
            self.status
                .set_raw(format!("\"{title}\" is not saved yet; press Ctrl+S first."));
            return;
        };
        self.fill = Some(FillState::from_definition(definition));
        self.screen = Screen::Preview;
        self.status
            .set_raw("Fill the form and press Enter to submit.");
    }

    fn on_submit(&mut self) {
        let Some(fill) = self.fill.as_mut() else {
            return;
        };
        match fill.try_submit() {
            SubmitOutcome::Accepted(submission) => {
                match self.registry.append_submission(&fill.title, submission) {
                    Some(total) => self.status.submitted(total),
                    None => self
                        .status
                        .set_raw(format!("\"{}\" is no longer in the registry.", fill.title)),
                }
            }
            SubmitOutcome::Rejected { issues } => self.status.issues_remaining(issues),
        }
    }

    fn on_file_loaded(&mut self, event: LoadEvent) {
        let contents = match event.result {
            Ok(contents) => contents,
            Err(reason) => {
                self.status
                    .report(DefinitionError::InvalidFileFormat { reason });
                return;
            }
        };
        match io::parse_definition_str(&contents, io::format_for_path(&event.path)) {
            Ok(definition) => self.install_definition(definition),
            Err(err) => self.status.report(err),
        }
    }

    /// A parsed definition repopulates the editor, re-renders the live
    /// form, and overwrites any registry entry of the same title.
    fn install_definition(&mut self, definition: FormDefinition) {
        self.draft.load(&definition);
        self.fill = Some(FillState::from_definition(&definition));
        self.screen = Screen::Preview;
        let title = definition.title.clone();
        self.registry.insert(definition);
        self.status.loaded(&title);
    }

    /// Selecting a title absent from the registry is a no-op.
    fn load_selected(&mut self, title: &str) {
        let Some(definition) = self.registry.get(title) else {
            return;
        };
        let definition = definition.clone();
        self.draft.load(&definition);
        self.fill = Some(FillState::from_definition(&definition));
        self.screen = Screen::Preview;
        self.status.loaded(&definition.title);
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.draft.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

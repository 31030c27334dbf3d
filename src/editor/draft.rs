use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{DefinitionError, FormDefinition};

use super::row::FieldRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColumn {
    Name,
    Kind,
    Required,
    Options,
}

impl RowColumn {
    pub const ORDER: [RowColumn; 4] = [
        RowColumn::Name,
        RowColumn::Kind,
        RowColumn::Required,
        RowColumn::Options,
    ];

    pub fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|column| *column == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    Title,
    Cell { row: usize, column: RowColumn },
}

/// The row-based definition editor: a title buffer plus an ordered,
/// mutable list of field rows. Nothing is validated until `build`.
#[derive(Debug, Clone)]
pub struct FormDraft {
    pub title: String,
    pub rows: Vec<FieldRow>,
    pub focus: EditorFocus,
    dirty: bool,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDraft {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            rows: Vec::new(),
            focus: EditorFocus::Title,
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Append one blank row and focus its name cell. No row limit.
    pub fn add_row(&mut self) {
        self.rows.push(FieldRow::blank());
        self.focus = EditorFocus::Cell {
            row: self.rows.len() - 1,
            column: RowColumn::Name,
        };
        self.dirty = true;
    }

    /// Remove the focused row, clamping focus to what remains.
    /// Does nothing while the title is focused.
    pub fn delete_focused_row(&mut self) -> bool {
        let EditorFocus::Cell { row, column } = self.focus else {
            return false;
        };
        if row >= self.rows.len() {
            return false;
        }
        self.rows.remove(row);
        self.focus = if self.rows.is_empty() {
            EditorFocus::Title
        } else {
            EditorFocus::Cell {
                row: row.min(self.rows.len() - 1),
                column,
            }
        };
        self.dirty = true;
        true
    }

    /// Rebuild the editor from a stored definition, preserving the
    /// type/required/options selections of every field.
    pub fn load(&mut self, definition: &FormDefinition) {
        self.title = definition.title.clone();
        self.rows = definition
            .fields
            .iter()
            .map(FieldRow::from_definition)
            .collect();
        self.focus = EditorFocus::Title;
        self.dirty = false;
    }

    /// Validate the draft and produce a definition with no submissions.
    ///
    /// An empty title or an empty row list aborts; so does any row whose
    /// name is blank, which aborts the whole save rather than skipping
    /// the row.
    pub fn build(&self) -> Result<FormDefinition, DefinitionError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DefinitionError::MissingTitle);
        }
        if self.rows.is_empty() {
            return Err(DefinitionError::EmptyFieldList);
        }
        let mut fields = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            if row.name.trim().is_empty() {
                return Err(DefinitionError::MissingFieldName { row: index });
            }
            fields.push(row.to_definition());
        }
        Ok(FormDefinition::new(title, fields))
    }

    /// Cycle focus forward or backward through the title and every cell
    /// of every row.
    pub fn focus_delta(&mut self, delta: i32) {
        let stops = 1 + self.rows.len() * RowColumn::ORDER.len();
        let current = match self.focus {
            EditorFocus::Title => 0,
            EditorFocus::Cell { row, column } => {
                1 + row * RowColumn::ORDER.len() + column.index()
            }
        };
        let len = stops as i32;
        let next = (((current as i32 + delta) % len) + len) % len;
        self.focus = if next == 0 {
            EditorFocus::Title
        } else {
            let slot = (next - 1) as usize;
            EditorFocus::Cell {
                row: slot / RowColumn::ORDER.len(),
                column: RowColumn::ORDER[slot % RowColumn::ORDER.len()],
            }
        };
    }

    /// Move focus between rows while keeping the column, with the title
    /// acting as the row above the table.
    pub fn focus_row_delta(&mut self, delta: i32) {
        match self.focus {
            EditorFocus::Title => {
                if delta > 0 && !self.rows.is_empty() {
                    self.focus = EditorFocus::Cell {
                        row: 0,
                        column: RowColumn::Name,
                    };
                }
            }
            EditorFocus::Cell { row, column } => {
                let target = row as i32 + delta;
                if target < 0 {
                    self.focus = EditorFocus::Title;
                } else {
                    let clamped = (target as usize).min(self.rows.len().saturating_sub(1));
                    self.focus = EditorFocus::Cell {
                        row: clamped,
                        column,
                    };
                }
            }
        }
    }

    /// Short label of the focused element, for status messages.
    pub fn focus_label(&self) -> String {
        match self.focus {
            EditorFocus::Title => "title".to_string(),
            EditorFocus::Cell { row, column } => {
                let cell = match column {
                    RowColumn::Name => "name",
                    RowColumn::Kind => "type",
                    RowColumn::Required => "mandatory",
                    RowColumn::Options => "options",
                };
                format!("row {} {cell}", row + 1)
            }
        }
    }

    /// Edit the focused cell. Returns whether anything changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let changed = match self.focus {
            EditorFocus::Title => edit_text(&mut self.title, key),
            EditorFocus::Cell { row, column } => {
                let Some(field_row) = self.rows.get_mut(row) else {
                    return false;
                };
                match column {
                    RowColumn::Name => edit_text(&mut field_row.name, key),
                    RowColumn::Options => edit_text(&mut field_row.options, key),
                    RowColumn::Kind => match key.code {
                        KeyCode::Left => {
                            field_row.kind = field_row.kind.cycle(-1);
                            true
                        }
                        KeyCode::Right => {
                            field_row.kind = field_row.kind.cycle(1);
                            true
                        }
                        _ => false,
                    },
                    RowColumn::Required => match key.code {
                        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                            field_row.required = !field_row.required;
                            true
                        }
                        _ => false,
                    },
                }
            }
        };
        if changed {
            self.dirty = true;
        }
        changed
    }
}

fn edit_text(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldDefinition, FieldType};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draft_with_row(name: &str) -> FormDraft {
        let mut draft = FormDraft::new();
        draft.title = "Survey".to_string();
        draft.add_row();
        draft.rows[0].name = name.to_string();
        draft
    }

    #[test]
    fn build_requires_a_title() {
        let mut draft = FormDraft::new();
        draft.add_row();
        draft.rows[0].name = "Age".to_string();
        assert_eq!(draft.build(), Err(DefinitionError::MissingTitle));
    }

    #[test]
    fn build_requires_at_least_one_row() {
        let mut draft = FormDraft::new();
        draft.title = "Survey".to_string();
        assert_eq!(draft.build(), Err(DefinitionError::EmptyFieldList));
    }

    #[test]
    fn blank_row_name_aborts_the_whole_build() {
        let mut draft = draft_with_row("Age");
        draft.add_row();
        assert_eq!(
            draft.build(),
            Err(DefinitionError::MissingFieldName { row: 1 })
        );
    }

    #[test]
    fn build_parses_options_and_starts_without_submissions() {
        let mut draft = draft_with_row("Plan");
        draft.rows[0].kind = FieldType::Dropdown;
        draft.rows[0].options = "a, b ,c".to_string();
        let definition = draft.build().unwrap();
        assert_eq!(definition.fields[0].options, vec!["a", "b", "c"]);
        assert!(definition.submissions.is_empty());
    }

    #[test]
    fn load_rebuilds_rows_and_clears_dirty() {
        let definition = FormDefinition::new(
            "Survey",
            vec![
                FieldDefinition::new("Age", FieldType::Number).required(),
                FieldDefinition::new("Plan", FieldType::Dropdown).with_options(["a", "b"]),
            ],
        );
        let mut draft = FormDraft::new();
        draft.add_row();
        assert!(draft.is_dirty());
        draft.load(&definition);
        assert!(!draft.is_dirty());
        assert_eq!(draft.title, "Survey");
        assert_eq!(draft.rows.len(), 2);
        assert_eq!(draft.rows[1].options, "a, b");
        assert_eq!(draft.build().unwrap().fields, definition.fields);
    }

    #[test]
    fn focus_cycles_through_title_and_every_cell() {
        let mut draft = draft_with_row("Age");
        draft.focus = EditorFocus::Title;
        for _ in 0..RowColumn::ORDER.len() {
            draft.focus_delta(1);
        }
        assert_eq!(
            draft.focus,
            EditorFocus::Cell {
                row: 0,
                column: RowColumn::Options
            }
        );
        draft.focus_delta(1);
        assert_eq!(draft.focus, EditorFocus::Title);
        draft.focus_delta(-1);
        assert_eq!(
            draft.focus,
            EditorFocus::Cell {
                row: 0,
                column: RowColumn::Options
            }
        );
    }

    #[test]
    fn delete_clamps_focus_to_remaining_rows() {
        let mut draft = draft_with_row("Age");
        draft.add_row();
        draft.rows[1].name = "Plan".to_string();
        draft.focus = EditorFocus::Cell {
            row: 1,
            column: RowColumn::Kind,
        };
        assert!(draft.delete_focused_row());
        assert_eq!(
            draft.focus,
            EditorFocus::Cell {
                row: 0,
                column: RowColumn::Kind
            }
        );
        assert!(draft.delete_focused_row());
        assert_eq!(draft.focus, EditorFocus::Title);
        assert!(!draft.delete_focused_row());
    }

    #[test]
    fn key_editing_targets_the_focused_cell() {
        let mut draft = draft_with_row("");
        draft.focus = EditorFocus::Cell {
            row: 0,
            column: RowColumn::Name,
        };
        assert!(draft.handle_key(&key(KeyCode::Char('A'))));
        assert_eq!(draft.rows[0].name, "A");

        draft.focus = EditorFocus::Cell {
            row: 0,
            column: RowColumn::Kind,
        };
        assert!(draft.handle_key(&key(KeyCode::Right)));
        assert_eq!(draft.rows[0].kind, FieldType::Number);

        draft.focus = EditorFocus::Cell {
            row: 0,
            column: RowColumn::Required,
        };
        assert!(draft.handle_key(&key(KeyCode::Char(' '))));
        assert!(!draft.rows[0].required);

        let ctrl = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        draft.focus = EditorFocus::Title;
        assert!(!draft.handle_key(&ctrl));
    }
}

use std::sync::OnceLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;

use crate::domain::{FieldDefinition, FieldType, SubmissionValue};

use super::error::FieldParseError;

pub const TRUE_LABEL: &str = "True";
pub const FALSE_LABEL: &str = "False";

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date pattern"))
}

/// Live input state of one rendered field.
#[derive(Debug, Clone)]
pub enum InputValue {
    Text(String),
    Choice { options: Vec<String>, selected: usize },
    Toggle(bool),
}

/// One labeled input control produced by the renderer. The control carries
/// its own definition, so capture never has to look a field up by label.
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub field: FieldDefinition,
    pub value: InputValue,
    pub error: Option<String>,
}

impl FieldInput {
    pub fn from_definition(field: &FieldDefinition) -> Self {
        let value = match field.kind {
            FieldType::String | FieldType::Number | FieldType::Date => {
                InputValue::Text(String::new())
            }
            FieldType::Dropdown => InputValue::Choice {
                options: field.options.clone(),
                selected: 0,
            },
            // the two-value selector lists True first, so True starts selected
            FieldType::Boolean => InputValue::Toggle(true),
        };
        Self {
            field: field.clone(),
            value,
            error: None,
        }
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            InputValue::Text(buffer) => buffer.clone(),
            InputValue::Choice { options, selected } => options
                .get(*selected)
                .cloned()
                .unwrap_or_else(|| "<no options>".to_string()),
            InputValue::Toggle(flag) => {
                let label = if *flag { TRUE_LABEL } else { FALSE_LABEL };
                label.to_string()
            }
        }
    }

    /// Edit the input. Returns whether anything changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match &mut self.value {
            InputValue::Text(buffer) => match key.code {
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
            },
            InputValue::Choice { options, selected } => match key.code {
                KeyCode::Left => {
                    if options.is_empty() {
                        return false;
                    }
                    *selected = if *selected == 0 {
                        options.len() - 1
                    } else {
                        *selected - 1
                    };
                    true
                }
                KeyCode::Right => {
                    if options.is_empty() {
                        return false;
                    }
                    *selected = (*selected + 1) % options.len();
                    true
                }
                _ => false,
            },
            InputValue::Toggle(flag) => match key.code {
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    *flag = !*flag;
                    true
                }
                _ => false,
            },
        }
    }

    /// Read the current value, enforcing the presence constraint for
    /// mandatory non-boolean fields and the text formats for
    /// Number/Date. Empty optional inputs capture as empty strings.
    pub fn current_value(&self) -> Result<SubmissionValue, FieldParseError> {
        let value = match &self.value {
            InputValue::Text(buffer) => {
                let trimmed = buffer.trim();
                match self.field.kind {
                    FieldType::Number if !trimmed.is_empty() => {
                        if trimmed.parse::<f64>().is_err() {
                            return Err(self.parse_error("expected a numeric value"));
                        }
                    }
                    FieldType::Date if !trimmed.is_empty() => {
                        if !date_pattern().is_match(trimmed) {
                            return Err(self.parse_error("expected a date formatted YYYY-MM-DD"));
                        }
                    }
                    _ => {}
                }
                SubmissionValue::Text(buffer.clone())
            }
            InputValue::Choice { options, selected } => {
                SubmissionValue::Text(options.get(*selected).cloned().unwrap_or_default())
            }
            InputValue::Toggle(flag) => SubmissionValue::Flag(*flag),
        };

        // booleans always carry a value, so presence only applies to text
        if self.field.required
            && value.as_text().is_some_and(|text| text.trim().is_empty())
        {
            return Err(self.parse_error("this field is mandatory"));
        }
        Ok(value)
    }

    fn parse_error(&self, message: &str) -> FieldParseError {
        FieldParseError {
            field: self.field.name.clone(),
            message: message.to_string(),
        }
    }
}

use crate::domain::{FormDefinition, Submission};

use super::field::FieldInput;

/// Result of attempting to capture the current inputs as a submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected { issues: usize },
}

/// The live fill-in form rendered from one definition: one input per
/// field, in definition order. Rebuilding from the same definition always
/// yields the same structure.
#[derive(Debug, Clone)]
pub struct FillState {
    pub title: String,
    pub fields: Vec<FieldInput>,
    pub focused: usize,
}

impl FillState {
    pub fn from_definition(definition: &FormDefinition) -> Self {
        Self {
            title: definition.title.clone(),
            fields: definition
                .fields
                .iter()
                .map(FieldInput::from_definition)
                .collect(),
            focused: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldInput> {
        self.fields.get_mut(self.focused)
    }

    pub fn focus_delta(&mut self, delta: i32) {
        if self.fields.is_empty() {
            return;
        }
        let len = self.fields.len() as i32;
        let next = ((self.focused as i32 + delta) % len + len) % len;
        self.focused = next as usize;
    }

    pub fn error_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|input| input.error.is_some())
            .count()
    }

    /// Read every input in order. Per-field failures are recorded on the
    /// inputs and reject the whole submission; nothing is captured until
    /// all fields read cleanly.
    pub fn try_submit(&mut self) -> SubmitOutcome {
        let mut submission = Submission::new();
        let mut issues = 0;
        for input in &mut self.fields {
            match input.current_value() {
                Ok(value) => {
                    input.error = None;
                    submission.insert(input.field.name.clone(), value);
                }
                Err(err) => {
                    issues += 1;
                    input.error = Some(err.message);
                }
            }
        }
        if issues > 0 {
            SubmitOutcome::Rejected { issues }
        } else {
            SubmitOutcome::Accepted(submission)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldDefinition, FieldType, SubmissionValue};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn survey() -> FormDefinition {
        FormDefinition::new(
            "Survey",
            vec![
                FieldDefinition::new("Age", FieldType::Number).required(),
                FieldDefinition::new("Member", FieldType::Boolean),
            ],
        )
    }

    fn type_text(state: &mut FillState, text: &str) {
        for ch in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            state.focused_field_mut().unwrap().handle_key(&key);
        }
    }

    #[test]
    fn rendering_is_idempotent_for_the_same_definition() {
        let definition = survey();
        let first = FillState::from_definition(&definition);
        let second = FillState::from_definition(&definition);
        assert_eq!(first.fields.len(), second.fields.len());
        for (a, b) in first.fields.iter().zip(&second.fields) {
            assert_eq!(a.field, b.field);
            assert_eq!(a.display_value(), b.display_value());
        }
    }

    #[test]
    fn submit_captures_values_in_field_order() {
        let mut state = FillState::from_definition(&survey());
        type_text(&mut state, "41");
        match state.try_submit() {
            SubmitOutcome::Accepted(submission) => {
                let entries: Vec<_> = submission.iter().collect();
                assert_eq!(entries[0].0, "Age");
                assert_eq!(entries[0].1, &SubmissionValue::Text("41".to_string()));
                assert_eq!(entries[1].0, "Member");
                assert_eq!(entries[1].1, &SubmissionValue::Flag(true));
            }
            SubmitOutcome::Rejected { issues } => panic!("rejected with {issues} issue(s)"),
        }
    }

    #[test]
    fn submit_rejects_and_marks_missing_mandatory_fields() {
        let mut state = FillState::from_definition(&survey());
        match state.try_submit() {
            SubmitOutcome::Rejected { issues } => assert_eq!(issues, 1),
            SubmitOutcome::Accepted(_) => panic!("empty mandatory field accepted"),
        }
        assert_eq!(state.error_count(), 1);
        assert!(state.fields[0].error.is_some());

        type_text(&mut state, "41");
        assert!(matches!(state.try_submit(), SubmitOutcome::Accepted(_)));
        assert_eq!(state.error_count(), 0);
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut state = FillState::from_definition(&survey());
        state.focus_delta(-1);
        assert_eq!(state.focused, 1);
        state.focus_delta(1);
        assert_eq!(state.focused, 0);
    }
}

use indexmap::IndexMap;

use crate::domain::{FormDefinition, Submission};

/// Maximum number of submissions shown in the recent list.
pub const RECENT_WINDOW: usize = 10;

/// In-memory collection of known form definitions, keyed by title.
///
/// The registry is an explicit value owned by whoever drives the session;
/// it is handed back when the UI exits and is never persisted on its own.
#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
    forms: IndexMap<String, FormDefinition>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.forms.contains_key(title)
    }

    /// Insert a definition keyed by its title, overwriting any existing
    /// entry of the same title in place (its prior submissions included).
    pub fn insert(&mut self, definition: FormDefinition) -> Option<FormDefinition> {
        self.forms.insert(definition.title.clone(), definition)
    }

    pub fn get(&self, title: &str) -> Option<&FormDefinition> {
        self.forms.get(title)
    }

    /// Known titles in insertion order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormDefinition)> {
        self.forms
            .iter()
            .map(|(title, definition)| (title.as_str(), definition))
    }

    /// Append a submission to the named form, returning the new total.
    /// `None` when the title is unknown.
    pub fn append_submission(&mut self, title: &str, submission: Submission) -> Option<usize> {
        let definition = self.forms.get_mut(title)?;
        definition.submissions.push(submission);
        Some(definition.submissions.len())
    }

    /// The last `min(total, RECENT_WINDOW)` submissions of the named form,
    /// together with the true total for continued display numbering.
    pub fn recent(&self, title: &str) -> Option<RecentSubmissions<'_>> {
        let definition = self.forms.get(title)?;
        let total = definition.submissions.len();
        let start = total.saturating_sub(RECENT_WINDOW);
        Some(RecentSubmissions {
            total,
            entries: &definition.submissions[start..],
        })
    }
}

/// A view of the most recent submissions of one form.
#[derive(Debug, Clone, Copy)]
pub struct RecentSubmissions<'a> {
    pub total: usize,
    pub entries: &'a [Submission],
}

impl<'a> RecentSubmissions<'a> {
    /// Entries paired with their display number, continuing from the true
    /// overall count rather than restarting at 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a Submission)> + '_ {
        let start = self.total - self.entries.len() + 1;
        self.entries
            .iter()
            .enumerate()
            .map(move |(offset, entry)| (start + offset, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldDefinition, FieldType, SubmissionValue};

    fn sample(title: &str) -> FormDefinition {
        FormDefinition::new(
            title,
            vec![FieldDefinition::new("Age", FieldType::Number).required()],
        )
    }

    fn submission(age: &str) -> Submission {
        let mut entry = Submission::new();
        entry.insert("Age".to_string(), SubmissionValue::Text(age.to_string()));
        entry
    }

    #[test]
    fn insert_keys_by_title_and_lookup_reproduces_fields() {
        let mut registry = FormRegistry::new();
        registry.insert(sample("T"));
        let stored = registry.get("T").expect("stored under title");
        assert_eq!(stored.fields, sample("T").fields);
    }

    #[test]
    fn reinsert_overwrites_in_place_including_submissions() {
        let mut registry = FormRegistry::new();
        registry.insert(sample("T"));
        registry.insert(sample("Other"));
        registry.append_submission("T", submission("30"));

        let replaced = registry.insert(sample("T")).expect("previous entry");
        assert_eq!(replaced.submissions.len(), 1);
        assert!(registry.get("T").unwrap().submissions.is_empty());
        // overwriting keeps the original position
        assert_eq!(registry.titles().collect::<Vec<_>>(), vec!["T", "Other"]);
    }

    #[test]
    fn append_submission_to_unknown_title_is_a_noop() {
        let mut registry = FormRegistry::new();
        assert_eq!(registry.append_submission("missing", submission("1")), None);
    }

    #[test]
    fn recent_window_caps_at_ten_and_numbers_from_the_total() {
        let mut registry = FormRegistry::new();
        registry.insert(sample("T"));
        for index in 0..13 {
            registry.append_submission("T", submission(&index.to_string()));
        }

        let recent = registry.recent("T").expect("known title");
        assert_eq!(recent.total, 13);
        assert_eq!(recent.entries.len(), RECENT_WINDOW);

        let numbers: Vec<usize> = recent.numbered().map(|(number, _)| number).collect();
        assert_eq!(numbers.first(), Some(&4));
        assert_eq!(numbers.last(), Some(&13));
    }

    #[test]
    fn recent_window_shows_everything_below_the_cap() {
        let mut registry = FormRegistry::new();
        registry.insert(sample("T"));
        registry.append_submission("T", submission("a"));
        registry.append_submission("T", submission("b"));

        let recent = registry.recent("T").expect("known title");
        assert_eq!(recent.entries.len(), 2);
        let numbers: Vec<usize> = recent.numbered().map(|(number, _)| number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}

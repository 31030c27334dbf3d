use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The kinds of data a form field can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Number,
    Dropdown,
    #[serde(rename = "True/false")]
    Boolean,
    Date,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Dropdown,
        FieldType::Boolean,
        FieldType::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Dropdown => "Dropdown",
            FieldType::Boolean => "True/false",
            FieldType::Date => "Date",
        }
    }

    /// Options text is only meaningful for dropdown fields.
    pub fn uses_options(self) -> bool {
        matches!(self, FieldType::Dropdown)
    }

    pub fn cycle(self, delta: i32) -> FieldType {
        let len = Self::ALL.len() as i32;
        let current = Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(0) as i32;
        let next = ((current + delta) % len + len) % len;
        Self::ALL[next as usize]
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One data point a form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(rename = "fieldName")]
    pub name: String,
    #[serde(rename = "fieldType")]
    pub kind: FieldType,
    #[serde(rename = "mandatory")]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: FieldType) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// A value captured for a single field at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionValue {
    Flag(bool),
    Text(String),
}

impl SubmissionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SubmissionValue::Text(text) => Some(text),
            SubmissionValue::Flag(_) => None,
        }
    }
}

impl fmt::Display for SubmissionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionValue::Flag(flag) => write!(f, "{flag}"),
            SubmissionValue::Text(text) => f.write_str(text),
        }
    }
}

/// One completed instance of a form, keyed by field name in field order.
pub type Submission = IndexMap<String, SubmissionValue>;

/// A named, ordered set of field definitions plus accumulated submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub title: String,
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl FormDefinition {
    pub fn new(title: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            title: title.into(),
            fields,
            submissions: Vec::new(),
        }
    }
}

/// Split comma-separated options text, trimming tokens and discarding empty
/// ones while preserving order.
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_options_and_discards_empty_tokens() {
        assert_eq!(split_options("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_options("one,, ,two"), vec!["one", "two"]);
        assert!(split_options("  ").is_empty());
        assert!(split_options("").is_empty());
    }

    #[test]
    fn field_type_round_trips_wire_names() {
        let json = serde_json::to_string(&FieldType::Boolean).unwrap();
        assert_eq!(json, "\"True/false\"");
        let parsed: FieldType = serde_json::from_str("\"True/false\"").unwrap();
        assert_eq!(parsed, FieldType::Boolean);
        let parsed: FieldType = serde_json::from_str("\"Dropdown\"").unwrap();
        assert_eq!(parsed, FieldType::Dropdown);
    }

    #[test]
    fn field_type_cycles_through_all_variants() {
        let mut kind = FieldType::String;
        for _ in 0..FieldType::ALL.len() {
            kind = kind.cycle(1);
        }
        assert_eq!(kind, FieldType::String);
        assert_eq!(FieldType::String.cycle(-1), FieldType::Date);
    }

    #[test]
    fn definition_serializes_with_wire_field_names() {
        let definition = FormDefinition::new(
            "Survey",
            vec![FieldDefinition::new("Age", FieldType::Number).required()],
        );
        let json = serde_json::to_string(&definition).unwrap();
        assert_eq!(
            json,
            "{\"title\":\"Survey\",\"fields\":[{\"fieldName\":\"Age\",\"fieldType\":\"Number\",\"mandatory\":true,\"options\":[]}],\"submissions\":[]}"
        );
    }

    #[test]
    fn submission_values_accept_text_and_flags() {
        let mut submission = Submission::new();
        submission.insert("Age".to_string(), SubmissionValue::Text("41".to_string()));
        submission.insert("Member".to_string(), SubmissionValue::Flag(true));
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, "{\"Age\":\"41\",\"Member\":true}");
        let parsed: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, submission);
    }
}

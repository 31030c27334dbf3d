use crate::domain::{FieldDefinition, FieldType, split_options};

/// One editable row of the field table: raw buffers plus the current
/// type/required selections. Options stay as comma-separated text until
/// the draft is built.
#[derive(Debug, Clone)]
pub struct FieldRow {
    pub name: String,
    pub kind: FieldType,
    pub required: bool,
    pub options: String,
}

impl FieldRow {
    /// A fresh row with the same selections a newly added row starts with:
    /// String type, mandatory preselected.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            kind: FieldType::String,
            required: true,
            options: String::new(),
        }
    }

    pub fn from_definition(field: &FieldDefinition) -> Self {
        Self {
            name: field.name.clone(),
            kind: field.kind,
            required: field.required,
            options: field.options.join(", "),
        }
    }

    pub fn to_definition(&self) -> FieldDefinition {
        FieldDefinition {
            name: self.name.trim().to_string(),
            kind: self.kind,
            required: self.required,
            options: split_options(&self.options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_round_trips_through_a_row() {
        let field = FieldDefinition::new("Plan", FieldType::Dropdown)
            .required()
            .with_options(["basic", "pro"]);
        let row = FieldRow::from_definition(&field);
        assert_eq!(row.options, "basic, pro");
        assert_eq!(row.to_definition(), field);
    }

    #[test]
    fn row_names_are_trimmed_when_built() {
        let mut row = FieldRow::blank();
        row.name = "  Age  ".to_string();
        row.kind = FieldType::Number;
        assert_eq!(row.to_definition().name, "Age");
    }
}

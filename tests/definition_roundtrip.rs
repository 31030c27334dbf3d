use formdeck::{
    DocumentFormat, FieldDefinition, FieldType, FormDefinition, FormRegistry,
    parse_definition_str, serialize_definition,
};

fn survey() -> FormDefinition {
    FormDefinition::new(
        "Survey",
        vec![FieldDefinition::new("Age", FieldType::Number).required()],
    )
}

#[test]
fn example_document_serializes_exactly() {
    let payload = serialize_definition(&survey(), DocumentFormat::Json, false).unwrap();
    assert_eq!(
        payload,
        r#"{"title":"Survey","fields":[{"fieldName":"Age","fieldType":"Number","mandatory":true,"options":[]}],"submissions":[]}"#
    );
}

#[test]
fn export_then_import_reproduces_title_and_fields() {
    let definition = FormDefinition::new(
        "Onboarding",
        vec![
            FieldDefinition::new("Full Name", FieldType::String).required(),
            FieldDefinition::new("Team", FieldType::Dropdown).with_options(["core", "infra"]),
            FieldDefinition::new("Remote", FieldType::Boolean),
            FieldDefinition::new("Start", FieldType::Date).required(),
        ],
    );
    let payload = serialize_definition(&definition, DocumentFormat::Json, true).unwrap();
    let parsed = parse_definition_str(&payload, DocumentFormat::Json).unwrap();
    assert_eq!(parsed.title, definition.title);
    assert_eq!(parsed.fields, definition.fields);
}

#[test]
fn imported_submissions_survive_registry_overwrites() {
    let raw = r#"{
        "title": "Survey",
        "fields": [
            {"fieldName": "Age", "fieldType": "Number", "mandatory": true, "options": []}
        ],
        "submissions": [{"Age": "41"}, {"Age": "29"}]
    }"#;
    let imported = parse_definition_str(raw, DocumentFormat::Json).unwrap();

    let mut registry = FormRegistry::new();
    registry.insert(survey());
    registry.insert(imported);

    let recent = registry.recent("Survey").unwrap();
    assert_eq!(recent.total, 2);
    let numbers: Vec<usize> = recent.numbered().map(|(number, _)| number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_round_trips_the_definition() {
    let payload = serialize_definition(&survey(), DocumentFormat::Yaml, true).unwrap();
    let parsed = parse_definition_str(&payload, DocumentFormat::Yaml).unwrap();
    assert_eq!(parsed.fields, survey().fields);
}

use formdeck::{FieldDefinition, FieldType, FormDeck, FormDefinition};

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let sample = FormDefinition::new(
        "Customer Survey",
        vec![
            FieldDefinition::new("Name", FieldType::String).required(),
            FieldDefinition::new("Age", FieldType::Number).required(),
            FieldDefinition::new("Plan", FieldType::Dropdown)
                .required()
                .with_options(["basic", "pro", "enterprise"]),
            FieldDefinition::new("Newsletter", FieldType::Boolean),
            FieldDefinition::new("Signup Date", FieldType::Date),
        ],
    );

    let registry = FormDeck::new().preload(sample).run()?;

    for (title, definition) in registry.iter() {
        println!(
            "{title}: {} field(s), {} submission(s)",
            definition.fields.len(),
            definition.submissions.len()
        );
    }
    Ok(())
}

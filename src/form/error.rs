#[derive(Debug, Clone)]
pub struct FieldParseError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldParseError {}

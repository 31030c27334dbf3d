mod definition;
mod error;

pub use definition::{
    FieldDefinition, FieldType, FormDefinition, Submission, SubmissionValue, split_options,
};
pub use error::DefinitionError;

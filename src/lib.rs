#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod editor;
mod form;
mod io;
mod presentation;
mod registry;

pub use app::{FormDeck, UiOptions};
pub use domain::{
    DefinitionError, FieldDefinition, FieldType, FormDefinition, Submission, SubmissionValue,
    split_options,
};
pub use io::{
    DocumentFormat, ExportOptions, export_definition, format_for_path, parse_definition_str,
    read_definition_file, serialize_definition,
};
pub use registry::{FormRegistry, RECENT_WINDOW, RecentSubmissions};

pub mod prelude {
    pub use super::{
        FieldDefinition, FieldType, FormDeck, FormDefinition, FormRegistry, UiOptions,
    };
}

mod export;
mod format;
mod import;

pub use export::{ExportOptions, export_definition, serialize_definition};
pub use format::DocumentFormat;
pub use import::{FileLoader, LoadEvent, format_for_path, parse_definition_str, read_definition_file};

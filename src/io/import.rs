use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use serde_json::Value;

use crate::domain::{DefinitionError, FormDefinition};

use super::DocumentFormat;

/// Parse file contents in any supported format into a `FormDefinition`.
///
/// Anything that is not an object carrying `title` and `fields` (with a
/// non-empty title) is an invalid file; the caller's state is untouched.
pub fn parse_definition_str(
    contents: &str,
    format: DocumentFormat,
) -> Result<FormDefinition, DefinitionError> {
    let value = parse_value(contents, format)?;
    definition_from_value(value)
}

/// Read and parse a definition file on the calling thread.
pub fn read_definition_file(path: &Path) -> Result<FormDefinition, DefinitionError> {
    let contents = fs::read_to_string(path).map_err(invalid)?;
    parse_definition_str(&contents, format_for_path(path))
}

/// Pick a parse format from the file extension, falling back to JSON.
pub fn format_for_path(path: &Path) -> DocumentFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        #[cfg(feature = "yaml")]
        Some("yaml") | Some("yml") => DocumentFormat::Yaml,
        #[cfg(feature = "toml")]
        Some("toml") => DocumentFormat::Toml,
        _ => DocumentFormat::Json,
    }
}

fn parse_value(contents: &str, format: DocumentFormat) -> Result<Value, DefinitionError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(contents).map_err(invalid),
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::from_str(contents).map_err(invalid),
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .map_err(invalid)
            .and_then(|value| serde_json::to_value(value).map_err(invalid)),
    }
}

fn definition_from_value(value: Value) -> Result<FormDefinition, DefinitionError> {
    let Some(map) = value.as_object() else {
        return Err(DefinitionError::InvalidFileFormat {
            reason: "expected a top-level object".to_string(),
        });
    };
    for key in ["title", "fields"] {
        if !map.contains_key(key) {
            return Err(DefinitionError::InvalidFileFormat {
                reason: format!("missing \"{key}\""),
            });
        }
    }
    let definition: FormDefinition = serde_json::from_value(value).map_err(invalid)?;
    if definition.title.trim().is_empty() {
        return Err(DefinitionError::InvalidFileFormat {
            reason: "form title is empty".to_string(),
        });
    }
    Ok(definition)
}

fn invalid(err: impl std::fmt::Display) -> DefinitionError {
    DefinitionError::InvalidFileFormat {
        reason: err.to_string(),
    }
}

/// Completion of one background file read. Parsing happens on the UI
/// thread once the contents arrive.
#[derive(Debug)]
pub struct LoadEvent {
    pub path: PathBuf,
    pub result: Result<String, String>,
}

/// Reads files off the UI thread and reports completions through a
/// channel drained by the event loop, so reading never blocks the
/// interface.
#[derive(Debug)]
pub struct FileLoader {
    sender: Sender<LoadEvent>,
    receiver: Receiver<LoadEvent>,
}

impl FileLoader {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Start reading `path` in the background; the completion arrives
    /// via `poll`.
    pub fn spawn_read(&self, path: PathBuf) {
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = fs::read_to_string(&path).map_err(|err| err.to_string());
            let _ = sender.send(LoadEvent { path, result });
        });
    }

    pub fn poll(&self) -> Option<LoadEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Default for FileLoader {
    fn default() -> Self {
        Self::new()
    }
}

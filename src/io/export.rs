use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::FormDefinition;

use super::DocumentFormat;

/// Controls where and how saved definitions are written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub directory: PathBuf,
    pub format: DocumentFormat,
    pub pretty: bool,
}

impl ExportOptions {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            format: DocumentFormat::Json,
            pretty: true,
        }
    }

    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Serialize a definition according to the requested format.
pub fn serialize_definition(
    definition: &FormDefinition,
    format: DocumentFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        DocumentFormat::Json => {
            if pretty {
                serde_json::to_string_pretty(definition).context("failed to serialize JSON")
            } else {
                serde_json::to_string(definition).context("failed to serialize JSON")
            }
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::to_string(definition).context("failed to serialize YAML")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => {
            if pretty {
                toml::to_string_pretty(definition).context("failed to serialize TOML")
            } else {
                toml::to_string(definition).context("failed to serialize TOML")
            }
        }
    }
}

/// Write `<title>.<ext>` into the export directory and return the path.
pub fn export_definition(
    definition: &FormDefinition,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let payload = serialize_definition(definition, options.format, options.pretty)?;
    let filename = format!(
        "{}.{}",
        sanitize_title(&definition.title),
        options.format.extension()
    );
    let path = options.directory.join(filename);
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(payload.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .and_then(|_| file.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

// titles become filenames; keep path separators out of them
fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|ch| if matches!(ch, '/' | '\\') { '-' } else { ch })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldDefinition, FieldType};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn survey() -> FormDefinition {
        FormDefinition::new(
            "Survey",
            vec![FieldDefinition::new("Age", FieldType::Number).required()],
        )
    }

    fn temp_export_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "formdeck-export-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn compact_json_matches_the_wire_format() {
        let payload = serialize_definition(&survey(), DocumentFormat::Json, false).unwrap();
        assert_eq!(
            payload,
            "{\"title\":\"Survey\",\"fields\":[{\"fieldName\":\"Age\",\"fieldType\":\"Number\",\"mandatory\":true,\"options\":[]}],\"submissions\":[]}"
        );
    }

    #[test]
    fn export_writes_a_file_named_after_the_title() {
        let dir = temp_export_dir();
        let options = ExportOptions::new(&dir);
        let path = export_definition(&survey(), &options).unwrap();
        assert_eq!(path.file_name().unwrap(), "Survey.json");
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"fieldName\": \"Age\""));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn export_to_a_missing_directory_fails() {
        let options = ExportOptions::new("/definitely/not/here");
        assert!(export_definition(&survey(), &options).is_err());
    }

    #[test]
    fn titles_with_separators_stay_inside_the_directory() {
        let dir = temp_export_dir();
        let mut definition = survey();
        definition.title = "a/b".to_string();
        let options = ExportOptions::new(&dir);
        let path = export_definition(&definition, &options).unwrap();
        assert_eq!(path.file_name().unwrap(), "a-b.json");
        let _ = fs::remove_dir_all(dir);
    }
}

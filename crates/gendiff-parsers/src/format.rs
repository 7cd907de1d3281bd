//! Input format detection from file extensions.

use std::fmt;
use std::path::Path;

use crate::error::{ParseError, ParseResult};

/// A supported input file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Infer the format from a path's extension, ignoring ASCII case.
    ///
    /// `.json` is JSON; `.yml` and `.yaml` are YAML. Anything else, including
    /// a missing extension, is rejected.
    pub fn from_path(path: &Path) -> ParseResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(FileFormat::Json),
            "yml" | "yaml" => Ok(FileFormat::Yaml),
            _ => Err(ParseError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension: if extension.is_empty() {
                    String::new()
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Json => f.write_str("json"),
            FileFormat::Yaml => f.write_str("yaml"),
        }
    }
}

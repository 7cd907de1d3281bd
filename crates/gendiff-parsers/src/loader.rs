//! File loading: read a configuration file and decode it into a mapping.

use std::path::Path;

use gendiff_types::{Mapping, Value};
use tracing::debug;

use crate::error::{ParseError, ParseResult};
use crate::format::FileFormat;
use crate::yaml;

/// Load a configuration file, inferring its format from the extension.
///
/// The extension is checked before the file is read, so an unsupported file
/// is rejected even if it does not exist.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Mapping> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), %format, bytes = content.len(), "loading file");

    decode(&content, format, path)
}

/// Decode an in-memory document of the given format.
pub fn parse_str(content: &str, format: FileFormat) -> ParseResult<Mapping> {
    decode(content, format, Path::new("<input>"))
}

fn decode(content: &str, format: FileFormat, origin: &Path) -> ParseResult<Mapping> {
    let value = match format {
        FileFormat::Json => {
            let json: serde_json::Value =
                serde_json::from_str(content).map_err(|source| ParseError::Json {
                    path: origin.to_path_buf(),
                    source,
                })?;
            Value::from(json)
        }
        FileFormat::Yaml => {
            let yaml_err = |source| ParseError::Yaml {
                path: origin.to_path_buf(),
                source,
            };
            let mut doc: serde_yaml::Value = serde_yaml::from_str(content).map_err(yaml_err)?;
            doc.apply_merge().map_err(yaml_err)?;
            yaml::convert(doc)?
        }
    };

    match value {
        Value::Mapping(map) => Ok(map),
        // An empty YAML document decodes to null.
        Value::Null if format == FileFormat::Yaml => Ok(Mapping::new()),
        other => Err(ParseError::NotAMapping {
            found: other.type_name(),
        }),
    }
}

//! Error types for the parsers crate.

use std::path::PathBuf;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file extension does not name a supported format.
    #[error("unsupported file format '{extension}' for {path:?} (expected .json, .yml or .yaml)")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// The file could not be read.
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON in {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is not valid YAML.
    #[error("invalid YAML in {path:?}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document's top-level value is not a mapping.
    #[error("top-level value must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    /// A YAML mapping key that cannot be represented as a string.
    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),

    /// Two distinct YAML keys that share the same string form.
    #[error("duplicate mapping key '{0}'")]
    DuplicateKey(String),

    /// A YAML float that is infinite or NaN.
    #[error("non-finite number is not supported: {0}")]
    NonFiniteNumber(String),
}

/// Convenience alias for parser results.
pub type ParseResult<T> = Result<T, ParseError>;

//! Configuration file loaders for gendiff.
//!
//! Reads JSON and YAML files and normalizes them into a
//! [`Mapping`](gendiff_types::Mapping). The input format is inferred from the
//! file extension.

pub mod error;
pub mod format;
pub mod loader;
pub mod yaml;

pub use error::{ParseError, ParseResult};
pub use format::FileFormat;
pub use loader::{parse_file, parse_str};

//! High-level API for gendiff.
//!
//! Ties the loaders, the differ and the renderer together. This is the main
//! entry point for applications embedding gendiff.

pub mod error;

use std::path::Path;

use tracing::debug;

pub use error::{SdkError, SdkResult};

// Re-export key types
pub use gendiff_diff::{DiffNode, DiffTree, Format, NodeKind, StylishConfig};
pub use gendiff_parsers::FileFormat;
pub use gendiff_types::{Mapping, Value};

/// Compare two configuration files and render the result in the named format.
///
/// The format name is validated before either file is read.
pub fn gen_diff(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
    format: &str,
) -> SdkResult<String> {
    let format: Format = format.parse()?;
    gen_diff_with(path1, path2, format)
}

/// Compare two configuration files and render the result in `format`.
pub fn gen_diff_with(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
    format: Format,
) -> SdkResult<String> {
    let tree = diff_files(path1, path2)?;
    Ok(format.render(&tree))
}

/// Load two configuration files and compute their diff tree.
pub fn diff_files(path1: impl AsRef<Path>, path2: impl AsRef<Path>) -> SdkResult<DiffTree> {
    let old = gendiff_parsers::parse_file(path1)?;
    let new = gendiff_parsers::parse_file(path2)?;

    let tree = gendiff_diff::diff_mappings(&old, &new);
    debug!(
        added = tree.additions(),
        removed = tree.removals(),
        updated = tree.updates(),
        "diff computed"
    );
    Ok(tree)
}

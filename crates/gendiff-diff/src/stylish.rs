//! Stylish renderer: brace-delimited, indented text with `+`/`-` markers.
//!
//! ```text
//! {
//!     common: {
//!       + follow: false
//!         setting1: Value 1
//!       - setting2: 200
//!     }
//! }
//! ```
//!
//! Mapping values that are not themselves diffed (an added subtree, the old
//! side of an update, ...) are expanded with the same indentation but
//! without markers.

use std::fmt::{self, Write};

use gendiff_types::Value;

use crate::config::StylishConfig;
use crate::tree::{DiffNode, DiffTree, NodeKind};

/// Render a diff tree with the default layout.
pub fn render(tree: &DiffTree) -> String {
    render_with(tree, &StylishConfig::default())
}

/// Render a diff tree with a custom layout.
pub fn render_with(tree: &DiffTree, config: &StylishConfig) -> String {
    Stylish { tree, config }.to_string()
}

/// [`Display`](fmt::Display) adapter producing the stylish text.
///
/// The output has no trailing newline.
pub struct Stylish<'a> {
    pub tree: &'a DiffTree,
    pub config: &'a StylishConfig,
}

impl fmt::Display for Stylish<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\n")?;
        write_nodes(f, &self.tree.nodes, 1, self.config)?;
        f.write_str("}")
    }
}

#[derive(Clone, Copy)]
enum Marker {
    Added,
    Removed,
    Blank,
}

impl Marker {
    fn sign(self) -> char {
        match self {
            Marker::Added => '+',
            Marker::Removed => '-',
            Marker::Blank => ' ',
        }
    }
}

fn write_nodes(
    out: &mut dyn Write,
    nodes: &[DiffNode],
    depth: usize,
    config: &StylishConfig,
) -> fmt::Result {
    for node in nodes {
        match &node.kind {
            NodeKind::Nested { children } => {
                write_prefix(out, Marker::Blank, &node.key, depth, config)?;
                out.write_str("{\n")?;
                write_nodes(out, children, depth + 1, config)?;
                writeln!(out, "{:indent$}}}", "", indent = config.key_indent(depth))?;
            }
            NodeKind::Unchanged { value } => {
                write_entry(out, Marker::Blank, &node.key, value, depth, config)?;
            }
            NodeKind::Added { value } => {
                write_entry(out, Marker::Added, &node.key, value, depth, config)?;
            }
            NodeKind::Removed { value } => {
                write_entry(out, Marker::Removed, &node.key, value, depth, config)?;
            }
            NodeKind::Updated { old, new } => {
                write_entry(out, Marker::Removed, &node.key, old, depth, config)?;
                write_entry(out, Marker::Added, &node.key, new, depth, config)?;
            }
        }
    }
    Ok(())
}

fn write_prefix(
    out: &mut dyn Write,
    marker: Marker,
    key: &str,
    depth: usize,
    config: &StylishConfig,
) -> fmt::Result {
    write!(
        out,
        "{:indent$}{:<width$}{}: ",
        "",
        marker.sign(),
        key,
        indent = config.marker_indent(depth),
        width = config.marker_width.max(1),
    )
}

fn write_entry(
    out: &mut dyn Write,
    marker: Marker,
    key: &str,
    value: &Value,
    depth: usize,
    config: &StylishConfig,
) -> fmt::Result {
    write_prefix(out, marker, key, depth, config)?;
    write_value(out, value, depth, config)?;
    out.write_char('\n')
}

/// Write a value whose key sits at `depth`. Mappings expand one level deeper.
fn write_value(
    out: &mut dyn Write,
    value: &Value,
    depth: usize,
    config: &StylishConfig,
) -> fmt::Result {
    let Value::Mapping(map) = value else {
        return write!(out, "{value}");
    };

    out.write_str("{\n")?;
    for (key, inner) in map {
        write!(out, "{:indent$}{key}: ", "", indent = config.key_indent(depth + 1))?;
        write_value(out, inner, depth + 1, config)?;
        out.write_char('\n')?;
    }
    write!(out, "{:indent$}}}", "", indent = config.key_indent(depth))
}

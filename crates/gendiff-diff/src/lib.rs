//! Diff engine for gendiff.
//!
//! Compares two configuration mappings into an ordered diff tree and renders
//! that tree as text.
//!
//! # Key Types
//!
//! - [`DiffTree`] / [`DiffNode`] / [`NodeKind`] — Recursive, key-sorted diff
//! - [`Format`] — Output format selection
//! - [`StylishConfig`] — Indentation settings for the stylish renderer

pub mod config;
pub mod error;
pub mod format;
pub mod stylish;
pub mod tree;

pub use config::StylishConfig;
pub use error::{DiffError, DiffResult};
pub use format::Format;
pub use stylish::{render, render_with, Stylish};
pub use tree::{diff_mappings, DiffNode, DiffTree, NodeKind};

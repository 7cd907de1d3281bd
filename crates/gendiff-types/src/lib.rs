//! Foundation types for gendiff.
//!
//! Every loader produces, and the differ consumes, the same dynamically-typed
//! [`Value`]. Configuration documents are mappings at the top level, so the
//! [`Mapping`] alias is the unit passed between crates.
//!
//! # Key Types
//!
//! - [`Value`] — Tagged union of null, bool, number, string, array and mapping
//! - [`Mapping`] — Sorted string-keyed map of values

pub mod value;

pub use value::{Mapping, Value};

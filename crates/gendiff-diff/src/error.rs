//! Error types for the diff crate.

/// Errors that can occur when selecting how a diff is rendered.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The requested output format is not known.
    #[error("unsupported format '{0}' (supported: stylish)")]
    UnsupportedFormat(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;

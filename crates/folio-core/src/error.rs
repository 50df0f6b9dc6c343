//! Error types for `folio-core`.
//!
//! Content loading returns [`CoreResult<T>`], which is an alias for
//! `Result<T, CoreError>`. Contact-form rejections use their own
//! [`ValidationError`](crate::contact::ValidationError) because every variant
//! is shown to the visitor.

use std::path::PathBuf;

/// Unified error type for core operations that touch the outside world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML content file.
    #[error("content parse error: {0}")]
    ContentParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `folio-core`.
pub type CoreResult<T> = Result<T, CoreError>;

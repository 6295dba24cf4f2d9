//! Error types for the application.
//!
//! - [`StorageError`] - localStorage access for the theme preference
//! - [`ThemeParseError`] - stored theme string that is not `light`/`dark`
//! - [`TreeError`] - JSON tree descriptions that fail to decode

use thiserror::Error;

/// localStorage errors for the persisted preference.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("localStorage not available")]
    Unavailable,
    #[error("failed to write `{0}` to localStorage")]
    WriteFailed(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ThemeParseError(pub String);

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid tree description: {0}")]
    Json(#[from] serde_json::Error),
}

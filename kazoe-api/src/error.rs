//! API error types

use kazoe_core::CoreError;
use thiserror::Error;

/// API-level errors
///
/// Today every failure originates in rule resolution or conversion;
/// the wrapper keeps the public surface stable if API-only failure
/// modes appear later.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rule resolution or conversion error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

//! Core error types

use thiserror::Error;

/// Errors produced by rule resolution and conversion
#[derive(Error, Debug)]
pub enum CoreError {
    /// Requested language code has no resolvable rule table
    #[error("no rule table for language '{code}'")]
    RuleNotFound {
        /// The language code that could not be resolved
        code: String,
    },

    /// Rule data failed shape validation or could not be parsed
    #[error("invalid rule data: {reason}")]
    InvalidRuleData {
        /// What was wrong with the data
        reason: String,
    },

    /// The rule table's magnitude sequence cannot express the input
    #[error("number {number} exceeds the table's maximum of {limit}")]
    UnsupportedNumber {
        /// The offending input
        number: u64,
        /// The largest value the table can express
        limit: u128,
    },
}

impl CoreError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CoreError::InvalidRuleData {
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

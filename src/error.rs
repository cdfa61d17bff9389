//! Error types for spark-clamp.
//!
//! Fitting itself never fails; errors only come from configuration and from
//! parsing computed-style strings.

use thiserror::Error;

/// Errors raised while validating options or reading style values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClampError {
    /// The ellipsis marker is empty, so truncated text could not be told apart.
    #[error("ellipsis marker must not be empty")]
    EmptyEllipsis,

    /// No split separators were configured.
    #[error("at least one split separator is required")]
    NoSeparators,

    /// A separator appears more than once in the split order.
    #[error("separator {0:?} is listed more than once")]
    DuplicateSeparator(String),

    /// A computed line-height string could not be parsed.
    #[error("invalid line-height value: {0:?}")]
    InvalidLineHeight(String),
}

//! Error types for preflight.

use thiserror::Error;

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;

/// Errors raised when parsing preflight values from text.
///
/// The estimation pipeline itself is total and never returns these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreflightError {
    /// Conversion mode name not recognized.
    #[error("invalid mode '{0}', expected one of: speed, power")]
    UnknownMode(String),
}

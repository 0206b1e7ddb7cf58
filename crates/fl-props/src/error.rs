//! Property lookup errors.

use thiserror::Error;

/// Result type for property lookups.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// Errors that can occur during refrigerant property lookups.
///
/// The sizing engine catches these locally and degrades the affected
/// catalog entry to "unavailable"; they are never fatal to a sizing batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// State outside the backend's valid correlation range.
    #[error("State out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Refrigerant unknown to this provider.
    #[error("Refrigerant not supported: {designation}")]
    UnknownRefrigerant { designation: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

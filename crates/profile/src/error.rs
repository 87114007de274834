//! Error types for the profile crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Struct-like variants that carry context
//! - A crate-wide `Result` alias

use thiserror::Error;

/// Errors that can occur while building or reading a profile
///
/// Rust concept: Using an enum for errors lets callers match on the case
/// they care about (e.g. a missing list) and propagate the rest with `?`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// A movie failed validation (empty title/genre, zero rating)
    #[error("Invalid movie: {reason}")]
    InvalidMovie { reason: String },

    /// The profile has no list for the requested field
    ///
    /// Add operations report this without touching the profile
    #[error("'{field}' list does not exist on this profile")]
    MissingField { field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProfileError>;

//! Error types for the refinement query builder.
//!
//! The builder uses a small hierarchical error system:
//! - `RefinerError` is the top-level error returned by all fallible public APIs
//! - `ValidationError` provides detail for developer errors in filter input
//!   and configuration tables
//!
//! The serializers themselves never return errors. A malformed value degrades
//! into a safe literal and a bad query is left for the search backend to
//! reject. Validation is an explicit, opt-in step.
//!
//! # Error Handling Pattern
//! ```rust
//! use refiners::{Config, Result};
//!
//! fn load(json: &str) -> Result<Config> {
//!     let config = Config::from_json(json)?;
//!     config.validate()?;
//!     Ok(config)
//! }
//! # assert!(load(r#"{"filters": []}"#).is_ok());
//! ```

use thiserror::Error;

/// Result type alias for refiner operations.
pub type Result<T> = std::result::Result<T, RefinerError>;

/// Top-level error enum for all fallible refiner operations.
///
/// This is the only error type returned by public APIs.
/// Use pattern matching to handle specific error cases.
#[derive(Debug, Error)]
pub enum RefinerError {
    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON payload could not be parsed.
    #[error("JSON error: {0}")]
    Json(String),

    /// A display helper was requested that is not registered.
    #[error("Unknown helper: {0}")]
    UnknownHelper(String),
}

impl RefinerError {
    /// Creates an unknown helper error for the given helper name.
    pub fn unknown_helper(name: impl Into<String>) -> Self {
        Self::UnknownHelper(name.into())
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for RefinerError {
    fn from(err: serde_json::Error) -> Self {
        RefinerError::Json(err.to_string())
    }
}

/// Validation errors for filter input and configuration tables.
///
/// These indicate developer errors in data handed to the builder, never
/// problems with an end user's selection.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    RequiredField {
        /// Name of the missing field.
        field: String,
    },

    /// A field has an invalid value.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the invalid field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// The same filter name appears more than once in a selection or a
    /// configuration table.
    #[error("Duplicate filter name: {name}")]
    DuplicateFilter {
        /// The repeated filter name.
        name: String,
    },
}

impl ValidationError {
    /// Creates a required field error.
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate filter error.
    pub fn duplicate_filter(name: impl Into<String>) -> Self {
        Self::DuplicateFilter { name: name.into() }
    }
}

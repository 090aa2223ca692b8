//! Filter data model and developer-error validation.
//!
//! The serializers in [`crate::query`] accept any filter and degrade
//! gracefully. Callers that want to catch developer errors early (a filter
//! name that would break the destination grammar) run
//! [`validate_filters`] first.
//!
//! # Validation Layers
//!
//! ```text
//! validate_filters()
//!     ├── validate_filter_name()   ← per filter, grammar-breaking characters
//!     └── duplicate names          ← filterName identifies one filter
//! ```

pub mod types;

pub use types::{Filter, FilterValue, FilterValueOperator, JoinOperator};

use crate::error::{RefinerError, ValidationError};
use crate::lookup::first_duplicate_name;

/// Characters that terminate or restructure a refiner expression in
/// either dialect.
const RESERVED_NAME_CHARS: &[char] = &[':', '(', ')', '"', ',', '{', '}', '=', '<', '>'];

/// Validates a single filter name.
///
/// # Rules
///
/// | Constraint | Reason |
/// |------------|--------|
/// | Non-empty | The name prefixes every clause |
/// | No whitespace | KQL and FQL both split property restrictions on spaces |
/// | None of `: ( ) " , { } = < >` | Grammar delimiters in KQL, FQL, or tokens |
pub fn validate_filter_name(name: &str) -> Result<(), RefinerError> {
    if name.is_empty() {
        return Err(ValidationError::required_field("filterName").into());
    }

    if let Some(c) = name.chars().find(|c| c.is_whitespace()) {
        return Err(ValidationError::invalid_field(
            "filterName",
            format!("'{}' contains whitespace {:?}", name, c),
        )
        .into());
    }

    if let Some(c) = name.chars().find(|c| RESERVED_NAME_CHARS.contains(c)) {
        return Err(ValidationError::invalid_field(
            "filterName",
            format!("'{}' contains reserved character '{}'", name, c),
        )
        .into());
    }

    Ok(())
}

/// Validates every filter in a selection.
///
/// Stops at the first invalid filter name, then rejects a name used by
/// more than one filter.
pub fn validate_filters(filters: &[Filter]) -> Result<(), RefinerError> {
    for filter in filters {
        validate_filter_name(&filter.filter_name)?;
    }

    if let Some(name) = first_duplicate_name(filters.iter().map(|f| f.filter_name.as_str())) {
        return Err(ValidationError::duplicate_filter(name).into());
    }

    Ok(())
}

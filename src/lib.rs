//! # Refiners
//!
//! Refinement query builder for search filter controls.
//!
//! Filter widgets (checkboxes, choice lists, date and number ranges) hand
//! over the user's selection as typed, operator-tagged values. This crate
//! turns that selection into the refinement expressions a search index
//! evaluates, in either of two dialects.
//!
//! ## Quick Start
//!
//! ```rust
//! use refiners::{
//!     build_function_refinement_string, build_keyword_refinement_string, Filter,
//!     FilterValue, FilterValueOperator,
//! };
//!
//! let filters = vec![
//!     Filter::new("Color", vec![FilterValue::new("Red")]),
//!     Filter::new(
//!         "Price",
//!         vec![
//!             FilterValue::with_operator("100", FilterValueOperator::Geq),
//!             FilterValue::with_operator("1000", FilterValueOperator::Leq),
//!         ],
//!     ),
//! ];
//!
//! // FQL: one condition per filter, combined by the caller
//! let fql = build_function_refinement_string(&filters, false);
//! assert_eq!(fql, vec!["Color:Red", "Price:range(100,1000)"]);
//!
//! // KQL: one OR-combined string
//! let kql = build_keyword_refinement_string(&filters[..1]);
//! assert_eq!(kql, "Color:\"Red\"");
//! ```
//!
//! ## Key Concepts
//!
//! ### Filter
//!
//! A **filter** is one refiner (a managed property). It carries its
//! values, each with a comparison operator and a selection flag, and a join
//! rule (`and`/`or`) for several selected values.
//!
//! ### Dialects
//!
//! - **KQL**: keyword grammar, `Color:"Red" OR Size:"S"`
//! - **FQL**: function grammar with ranges, `Price:range(100,max)`,
//!   `Color:or(Red,Blue)`
//!
//! ### Configuration table
//!
//! Filters are classified (`date`, `taxonomy`, ...) by a configuration
//! table looked up by filter name. See [`lookup_configuration`].
//!
//! ## Thread Safety
//!
//! Every operation is a pure function over borrowed input. Nothing reads
//! ambient locale, timezone, or shared state, so calls may run on any
//! thread concurrently and always produce identical output for identical
//! input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============================================================================
// Module declarations
// ============================================================================

mod config;
mod error;

// Domain modules
pub mod filter;
pub mod lookup;
pub mod query;
pub mod range;
pub mod tokens;

/// Named display helpers for result templates.
pub mod helpers;

// ============================================================================
// Public API re-exports
// ============================================================================

// Configuration
pub use config::Config;

// Error handling
pub use error::{RefinerError, Result, ValidationError};

// Filter model
pub use filter::{
    validate_filter_name, validate_filters, Filter, FilterValue, FilterValueOperator,
    JoinOperator,
};

// Configuration lookups
pub use lookup::{lookup_configuration, selected_values_by_type, FilterConfiguration, FilterType};

// Query building
pub use query::{
    build_function_refinement_string, build_keyword_refinement_string, build_refinement,
    combine_function_conditions, QueryDialect, Refinement,
};

// Template token references
pub use tokens::find_referenced_filters;

// Number range widget state
pub use range::NumberRange;

// Display helpers
pub use helpers::{HelperContext, HelperRegistry};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Convenient imports for common refiner usage.
///
/// ```rust
/// use refiners::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{RefinerError, Result};
    pub use crate::filter::{Filter, FilterValue, FilterValueOperator, JoinOperator};
    pub use crate::query::{
        build_function_refinement_string, build_keyword_refinement_string, build_refinement,
        QueryDialect, Refinement,
    };
    pub use crate::tokens::find_referenced_filters;
}

//! Type definitions for filters and their values.
//!
//! A **filter** is one refiner the user can narrow results by (a managed
//! property such as `RefinableString01` or `LastModifiedTime`). Each filter
//! carries the values the UI layer offers for it, each tagged with a
//! comparison operator and a selection flag.
//!
//! # Shape
//!
//! ```text
//! Filter
//!     ├── filter_name   (stable across configuration table and query)
//!     ├── operator      (JoinOperator: how several values combine)
//!     └── values[]      (FilterValue: name, value, operator, selected)
//! ```
//!
//! All types are built fresh from UI or URL state on every refinement
//! request. The serializers only read them.

use serde::{Deserialize, Serialize};

// ============================================================================
// FilterValueOperator
// ============================================================================

/// Comparison operator attached to a single filter value.
///
/// Determines comparison semantics and, for date and number values, which
/// side of a range the value bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValueOperator {
    /// Equality (implicit default).
    #[default]
    Eq,
    /// Greater than or equal.
    Geq,
    /// Strictly greater than.
    Gt,
    /// Less than or equal.
    Leq,
    /// Strictly less than.
    Lt,
}

impl FilterValueOperator {
    /// Returns true if this operator opens a range (`Gt` or `Geq`).
    pub fn is_lower_bound(&self) -> bool {
        match self {
            Self::Gt | Self::Geq => true,
            Self::Eq | Self::Leq | Self::Lt => false,
        }
    }

    /// Returns true if this operator closes a range (`Lt` or `Leq`).
    pub fn is_upper_bound(&self) -> bool {
        match self {
            Self::Lt | Self::Leq => true,
            Self::Eq | Self::Geq | Self::Gt => false,
        }
    }
}

// ============================================================================
// JoinOperator
// ============================================================================

/// How several selected values of the same filter are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinOperator {
    /// All values must match.
    And,
    /// Any value may match.
    #[default]
    Or,
}

impl JoinOperator {
    /// Lower-case function name used by the FQL dialect (`and(...)`, `or(...)`).
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Upper-case keyword used by the KQL dialect (`AND`, `OR`).
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

// ============================================================================
// FilterValue
// ============================================================================

/// One value offered for a filter.
///
/// `value` is the literal placed in the query. `name` is the display label
/// and never appears in a serialized query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValue {
    /// Display label shown in the filter widget.
    #[serde(default)]
    pub name: String,

    /// Raw literal to place in the query (may be a taxonomy token).
    #[serde(default)]
    pub value: String,

    /// Comparison operator for this value.
    #[serde(default)]
    pub operator: FilterValueOperator,

    /// Whether the user currently has this value selected.
    #[serde(default)]
    pub selected: bool,
}

impl FilterValue {
    /// Creates a selected equality value whose label equals its literal.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            value,
            operator: FilterValueOperator::Eq,
            selected: true,
        }
    }

    /// Creates a selected value with the given comparison operator.
    pub fn with_operator(value: impl Into<String>, operator: FilterValueOperator) -> Self {
        Self {
            operator,
            ..Self::new(value)
        }
    }

    /// Replaces the display label.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the value as not selected.
    pub fn unselected(mut self) -> Self {
        self.selected = false;
        self
    }
}

// ============================================================================
// Filter
// ============================================================================

/// A refiner together with its values and join rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Unique identifier, shared by the configuration table and the query.
    pub filter_name: String,

    /// Values in display order.
    #[serde(default)]
    pub values: Vec<FilterValue>,

    /// Join rule for several selected values.
    #[serde(default)]
    pub operator: JoinOperator,
}

impl Filter {
    /// Creates a filter joined with `or`.
    pub fn new(filter_name: impl Into<String>, values: Vec<FilterValue>) -> Self {
        Self {
            filter_name: filter_name.into(),
            values,
            operator: JoinOperator::Or,
        }
    }

    /// Sets the join rule.
    pub fn with_operator(mut self, operator: JoinOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Iterates the values the user has selected, in order.
    pub fn selected_values(&self) -> impl Iterator<Item = &FilterValue> {
        self.values.iter().filter(|v| v.selected)
    }

    /// Returns true if at least one value is selected.
    pub fn has_selection(&self) -> bool {
        self.values.iter().any(|v| v.selected)
    }
}

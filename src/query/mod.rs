//! Refinement query building.
//!
//! Converts selected filters into the two query dialects the search index
//! evaluates:
//!
//! - [`build_keyword_refinement_string`]: KQL, one OR-combined string
//! - [`build_function_refinement_string`]: FQL, one condition per filter
//!
//! [`build_refinement`] picks the dialect from a [`Config`](crate::Config).
//! All functions here are pure: no I/O, no shared state, and identical
//! output for identical input.

pub mod classify;
mod fql;
mod kql;

pub use fql::build_function_refinement_string;
pub use kql::build_keyword_refinement_string;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::Config;
use crate::filter::Filter;

/// Query language used for refinement conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryDialect {
    /// Keyword query language (`Color:"Red" OR Size:"S"`).
    Keyword,

    /// FAST query language (`Color:or(Red,Blue)`, `Price:range(1,9)`).
    #[default]
    Function,
}

/// Output of [`build_refinement`], tagged with its dialect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refinement {
    /// Combined KQL string (empty when nothing is selected).
    Keyword(String),

    /// Per-filter FQL conditions.
    Function(Vec<String>),
}

impl Refinement {
    /// Returns true if no filter contributed a condition.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Keyword(query) => query.is_empty(),
            Self::Function(conditions) => conditions.is_empty(),
        }
    }

    /// Returns the dialect this refinement was built for.
    pub fn dialect(&self) -> QueryDialect {
        match self {
            Self::Keyword(_) => QueryDialect::Keyword,
            Self::Function(_) => QueryDialect::Function,
        }
    }

    /// Collapses the refinement into a single query string.
    ///
    /// FQL conditions are AND-combined with [`combine_function_conditions`].
    /// Returns `None` when nothing is selected.
    pub fn to_query(&self) -> Option<String> {
        match self {
            Self::Keyword(query) if query.is_empty() => None,
            Self::Keyword(query) => Some(query.clone()),
            Self::Function(conditions) => combine_function_conditions(conditions),
        }
    }
}

/// Builds refinement conditions for `filters` in the configured dialect.
///
/// # Example
///
/// ```rust
/// use refiners::{build_refinement, Config, Filter, FilterValue, Refinement};
///
/// let filters = vec![Filter::new("Color", vec![FilterValue::new("Red")])];
///
/// let fql = build_refinement(&filters, &Config::function(false));
/// assert_eq!(fql, Refinement::Function(vec!["Color:Red".to_string()]));
///
/// let kql = build_refinement(&filters, &Config::keyword());
/// assert_eq!(kql, Refinement::Keyword("Color:\"Red\"".to_string()));
/// ```
#[instrument(skip(filters, config), fields(dialect = ?config.dialect))]
pub fn build_refinement(filters: &[Filter], config: &Config) -> Refinement {
    match config.dialect {
        QueryDialect::Keyword => Refinement::Keyword(build_keyword_refinement_string(filters)),
        QueryDialect::Function => Refinement::Function(build_function_refinement_string(
            filters,
            config.encode_tokens,
        )),
    }
}

/// AND-combines per-filter FQL conditions into one expression.
///
/// No conditions → `None`; one condition → unchanged; several →
/// `and(c1,c2,...)`.
pub fn combine_function_conditions<S: AsRef<str>>(conditions: &[S]) -> Option<String> {
    match conditions {
        [] => None,
        [single] => Some(single.as_ref().to_string()),
        many => {
            let joined: Vec<&str> = many.iter().map(AsRef::as_ref).collect();
            Some(format!("and({})", joined.join(",")))
        }
    }
}

//! Keyword query (KQL) refinement serializer.
//!
//! Produces one combined string where every filter contributes one clause
//! and clauses are OR-combined ("any of these refiners matches"):
//!
//! ```text
//! Color:"Red" OR (Size:"S" AND Size:"M") OR LastModifiedTime>=2021-01-01
//! ```

use tracing::{debug, instrument, trace};

use super::classify::is_strict_iso8601;
use crate::filter::Filter;

/// Separator between the clauses of different filters.
const FILTER_SEPARATOR: &str = " OR ";

/// Builds the KQL refinement string for `filters`.
///
/// Per filter, only selected values are considered:
/// - Date values (strict ISO-8601) bound a range. The first `Gt`/`Geq` date
///   is the start, the first `Lt`/`Leq` date is the end; later dates on the
///   same side are ignored. Both → `name:start..end`, start only →
///   `name>=start`, end only → `name<end`.
/// - Without a date bound, every plain value becomes `name:"value"`. Two or
///   more are joined with the filter's `AND`/`OR` and parenthesised.
///
/// Filters that produce nothing are skipped without leaving a separator.
/// Returns an empty string when no filter contributes.
#[instrument(skip(filters), fields(filters = filters.len()))]
pub fn build_keyword_refinement_string(filters: &[Filter]) -> String {
    let clauses: Vec<String> = filters.iter().filter_map(keyword_clause).collect();
    debug!(clauses = clauses.len(), "Built KQL refinement");
    clauses.join(FILTER_SEPARATOR)
}

fn keyword_clause(filter: &Filter) -> Option<String> {
    let name = &filter.filter_name;
    let mut start: Option<&str> = None;
    let mut end: Option<&str> = None;
    let mut equalities: Vec<String> = Vec::new();

    for value in filter.selected_values() {
        if is_strict_iso8601(&value.value) {
            if start.is_none() && value.operator.is_lower_bound() {
                start = Some(value.value.as_str());
            }
            if end.is_none() && value.operator.is_upper_bound() {
                end = Some(value.value.as_str());
            }
        } else {
            equalities.push(format!("{}:\"{}\"", name, value.value));
        }
    }

    let clause = match (start, end) {
        (Some(start), Some(end)) => Some(format!("{}:{}..{}", name, start, end)),
        (Some(start), None) => Some(format!("{}>={}", name, start)),
        (None, Some(end)) => Some(format!("{}<{}", name, end)),
        (None, None) => match equalities.len() {
            0 => None,
            1 => equalities.pop(),
            _ => {
                let joiner = format!(" {} ", filter.operator.keyword());
                Some(format!("({})", equalities.join(&joiner)))
            }
        },
    };

    trace!(filter = %name, clause = ?clause, "KQL clause");
    clause
}

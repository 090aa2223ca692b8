//! Filter configuration lookups.
//!
//! The configuration table declares a [`FilterType`] per filter name. These
//! helpers resolve a filter's entry and gather raw values across all
//! filters of one declared type (used, for example, to collect every
//! selected taxonomy token for a term lookup).

pub mod types;

pub use types::{FilterConfiguration, FilterType};

use std::collections::HashSet;

use crate::filter::Filter;

/// Returns the configuration entry for `filter`, matching on name.
///
/// Duplicates in `table` are a caller error and are not rejected here: the
/// first entry with a matching name wins. Use
/// [`Config::validate`](crate::Config::validate) to detect them.
pub fn lookup_configuration<'a>(
    filter: &Filter,
    table: &'a [FilterConfiguration],
) -> Option<&'a FilterConfiguration> {
    table.iter().find(|c| c.filter_name == filter.filter_name)
}

/// Collects the raw `value` strings of every filter declared as
/// `filter_type`, sorted ascending.
///
/// Values are collected whether or not they are selected. Filters without
/// a configuration entry are skipped. Ordering is by byte-wise UTF-8
/// comparison, so the result does not depend on locale. This is code point
/// order; it differs from UTF-16 code unit order only between characters
/// above U+FFFF and those in U+E000..=U+FFFF.
pub fn selected_values_by_type(
    filters: &[Filter],
    filter_type: &FilterType,
    table: &[FilterConfiguration],
) -> Vec<String> {
    let mut values: Vec<String> = filters
        .iter()
        .filter(|filter| {
            lookup_configuration(filter, table).is_some_and(|c| &c.filter_type == filter_type)
        })
        .flat_map(|filter| filter.values.iter().map(|v| v.value.clone()))
        .collect();

    values.sort();
    values
}

/// Returns the first name that appears more than once in `names`.
pub(crate) fn first_duplicate_name<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}

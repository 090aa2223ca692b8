//! Filter references in templated strings.
//!
//! Query templates may embed the current selection through placeholders
//! such as `{filters.Color}` or `{filters.Color.valueAsText}`. When a
//! template already consumes a filter this way, the caller should not also
//! apply it as a refiner. [`find_referenced_filters`] reports which of the
//! active filters a template references.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::filter::Filter;

/// Namespace segment that introduces a filter reference.
pub const FILTERS_TOKEN_NAMESPACE: &str = "filters";

/// A `{...}` placeholder that does not contain another opening brace.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{]*?\}").expect("Invalid placeholder regex"));

/// Returns the filters from `selected_filters` referenced by `template`.
///
/// A placeholder counts when its dot-separated path starts with `filters`
/// and has a second segment; that segment is the filter name. Results are
/// in order of first reference and each filter name appears at most once.
/// Placeholders of any other shape are ignored.
///
/// The filter returned for a token is the one whose name matched.
///
/// # Example
///
/// ```rust
/// use refiners::{find_referenced_filters, Filter};
///
/// let selected = vec![Filter::new("Color", vec![]), Filter::new("Size", vec![])];
/// let found = find_referenced_filters(&selected, "{searchTerms} {filters.Size}");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].filter_name, "Size");
/// ```
pub fn find_referenced_filters<'a>(selected_filters: &'a [Filter], template: &str) -> Vec<&'a Filter> {
    let mut referenced: Vec<&'a Filter> = Vec::new();

    for placeholder in PLACEHOLDER.find_iter(template) {
        let text = placeholder.as_str();
        let inner = &text[1..text.len() - 1];
        let mut segments = inner.split('.');

        if segments.next() != Some(FILTERS_TOKEN_NAMESPACE) {
            continue;
        }
        let Some(name) = segments.next() else {
            continue;
        };

        if referenced.iter().any(|f| f.filter_name == name) {
            continue;
        }
        if let Some(filter) = selected_filters.iter().find(|f| f.filter_name == name) {
            trace!(filter = name, "Filter referenced by template token");
            referenced.push(filter);
        }
    }

    referenced
}

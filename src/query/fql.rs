//! FAST query (FQL) refinement serializer.
//!
//! Produces one condition per filter. Conditions use the function-call
//! grammar (`range(...)`, `and(...)`, `or(...)`) and are combined by the
//! caller, usually with [`combine_function_conditions`](super::combine_function_conditions).
//!
//! # Decision order per filter
//!
//! ```text
//! selected values
//!     ├── numeric Geq + Leq pair      → name:range(from,to)
//!     ├── single numeric Geq / Leq    → name:range(from,max) / name:range(min,to)
//!     ├── two or more values
//!     │     ├── date start and end    → name:range(s,e,from="GE",to="LE")
//!     │     └── otherwise             → name:or(v1,v2,...) / name:and(...)
//!     └── single value                → name:literal (dates become range(...))
//! ```

use tracing::{debug, instrument, trace};

use super::classify::{
    contains_whitespace, encode_uri_component, is_digits_only, is_range_expression,
    is_signed_decimal, is_strict_iso8601, is_string_typed_filter, is_taxonomy_encoded_marker,
    is_yes_no_filter, EMPTY_VALUE_LITERAL, YES_NO_FALSE_TOKEN, YES_NO_TRUE_TOKEN,
};
use crate::filter::{Filter, FilterValue, FilterValueOperator};

/// Builds one FQL condition per filter with at least one selected value.
///
/// With `encode_tokens`, values carrying the taxonomy token marker are
/// percent-encoded so they survive a GET request. POST transports pass
/// `false` and keep the raw form.
///
/// Output order follows input order and is byte-identical for equal input.
#[instrument(skip(filters), fields(filters = filters.len()))]
pub fn build_function_refinement_string(filters: &[Filter], encode_tokens: bool) -> Vec<String> {
    let conditions: Vec<String> = filters
        .iter()
        .filter_map(|filter| function_condition(filter, encode_tokens))
        .collect();
    debug!(conditions = conditions.len(), "Built FQL refinement");
    conditions
}

fn function_condition(filter: &Filter, encode_tokens: bool) -> Option<String> {
    let name = &filter.filter_name;
    let values: Vec<&FilterValue> = filter.selected_values().collect();

    if let Some(range) = numeric_range(&values) {
        trace!(filter = %name, branch = "numeric_range", "FQL condition");
        return Some(format!("{}:{}", name, range));
    }

    match values.as_slice() {
        [] => None,
        [single] => {
            trace!(filter = %name, branch = "single", "FQL condition");
            Some(single_value_condition(filter, single, encode_tokens))
        }
        many => {
            trace!(filter = %name, branch = "multi", values = many.len(), "FQL condition");
            Some(multi_value_condition(filter, many, encode_tokens))
        }
    }
}

/// Numeric range shortcuts produced by the number range widget.
fn numeric_range(values: &[&FilterValue]) -> Option<String> {
    match values {
        [a, b] if is_signed_decimal(&a.value) && is_signed_decimal(&b.value) => {
            let from = values.iter().find(|v| v.operator == FilterValueOperator::Geq)?;
            let to = values.iter().find(|v| v.operator == FilterValueOperator::Leq)?;
            Some(format!("range({},{})", from.value, to.value))
        }
        [single] if is_signed_decimal(&single.value) => match single.operator {
            FilterValueOperator::Geq => Some(format!("range({},max)", single.value)),
            FilterValueOperator::Leq => Some(format!("range(min,{})", single.value)),
            FilterValueOperator::Eq | FilterValueOperator::Gt | FilterValueOperator::Lt => None,
        },
        _ => None,
    }
}

fn multi_value_condition(filter: &Filter, values: &[&FilterValue], encode_tokens: bool) -> String {
    let name = &filter.filter_name;
    let mut start: Option<(&str, &'static str)> = None;
    let mut end: Option<(&str, &'static str)> = None;

    for value in values {
        if !is_strict_iso8601(&value.value) {
            continue;
        }
        if start.is_none() {
            start = start_keyword(value.operator).map(|kw| (value.value.as_str(), kw));
        }
        if end.is_none() {
            end = end_keyword(value.operator).map(|kw| (value.value.as_str(), kw));
        }
    }

    if let (Some((start, from)), Some((end, to))) = (start, end) {
        return format!(
            "{}:range({},{},from=\"{}\",to=\"{}\")",
            name, start, end, from, to
        );
    }

    let literals: Vec<String> = values
        .iter()
        .map(|v| value_literal(name, &v.value, encode_tokens))
        .collect();
    format!(
        "{}:{}({})",
        name,
        filter.operator.function_name(),
        literals.join(",")
    )
}

fn single_value_condition(filter: &Filter, value: &FilterValue, encode_tokens: bool) -> String {
    let name = &filter.filter_name;
    let literal = value_literal(name, &value.value, encode_tokens);

    let literal = if is_strict_iso8601(&literal) {
        match value.operator {
            FilterValueOperator::Gt | FilterValueOperator::Geq => format!("range({},max)", literal),
            FilterValueOperator::Lt | FilterValueOperator::Leq => format!("range(min,{})", literal),
            FilterValueOperator::Eq => literal,
        }
    } else {
        literal
    };

    format!("{}:{}", name, literal)
}

fn start_keyword(operator: FilterValueOperator) -> Option<&'static str> {
    match operator {
        FilterValueOperator::Gt => Some("GT"),
        FilterValueOperator::Geq => Some("GE"),
        FilterValueOperator::Eq | FilterValueOperator::Leq | FilterValueOperator::Lt => None,
    }
}

fn end_keyword(operator: FilterValueOperator) -> Option<&'static str> {
    match operator {
        FilterValueOperator::Lt => Some("LT"),
        FilterValueOperator::Leq => Some("LE"),
        FilterValueOperator::Eq | FilterValueOperator::Geq | FilterValueOperator::Gt => None,
    }
}

/// Turns a raw value into an FQL literal.
///
/// Applied in order: empty placeholder, yes/no sentinel mapping, quoting
/// (whitespace outside a `range(...)`, or digits on a string-typed
/// property), then percent-encoding of taxonomy tokens when requested.
pub(crate) fn value_literal(filter_name: &str, raw: &str, encode_tokens: bool) -> String {
    let mut literal = if raw.is_empty() {
        EMPTY_VALUE_LITERAL.to_string()
    } else {
        raw.to_string()
    };

    if is_yes_no_filter(filter_name) {
        if literal == YES_NO_TRUE_TOKEN {
            literal = "true".to_string();
        } else if literal == YES_NO_FALSE_TOKEN {
            literal = "false".to_string();
        }
    }

    let needs_quotes = (contains_whitespace(&literal) && !is_range_expression(&literal))
        || (is_string_typed_filter(filter_name) && is_digits_only(&literal));
    if needs_quotes {
        literal = format!("\"{}\"", literal);
    }

    if encode_tokens && is_taxonomy_encoded_marker(&literal) {
        literal = encode_uri_component(&literal);
    }

    literal
}

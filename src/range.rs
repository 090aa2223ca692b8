//! Number range filter state.
//!
//! A number range widget holds two text boxes (from, to). On apply it emits
//! the `Geq`/`Leq` values that the FQL numeric shortcuts turn into
//! `range(...)` conditions. On page load it restores its boxes from the
//! refinement found in the URL, which is either an FQL condition or a
//! percent-encoded JSON array of filters.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::filter::{FilterValue, FilterValueOperator};

/// What a numeric text box may contain while the user is still typing.
static PARTIAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*(\.[0-9]*)?$").expect("Invalid partial number regex"));

/// Bound pattern inside a serialized `range(...)`.
const BOUND: &str = r"(-?[0-9]+(?:\.[0-9]+)?)";

/// The filter name must start the input or follow a non-word character.
const NAME_BOUNDARY: &str = r"(?:^|[^A-Za-z0-9_])";

/// Returns true if `input` is acceptable in a numeric text box.
///
/// Accepts the empty string and intermediate states such as `-`, `12.`.
pub fn is_partial_number(input: &str) -> bool {
    PARTIAL_NUMBER.is_match(input)
}

/// Returns the canonical form of a number (`"007"` → `"7"`, `"1.50"` → `"1.5"`).
///
/// Returns `None` for empty or non-numeric input.
pub fn normalize_number(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let number: f64 = trimmed.parse().ok()?;
    if !number.is_finite() {
        return None;
    }
    if number == 0.0 {
        return Some("0".to_string());
    }
    Some(number.to_string())
}

/// Current bounds of a number range widget, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberRange {
    /// Lower bound (inclusive), raw input.
    pub from: Option<String>,

    /// Upper bound (inclusive), raw input.
    pub to: Option<String>,
}

impl NumberRange {
    /// Creates a range from optional raw bounds; empty strings count as unset.
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        let keep = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            from: keep(from),
            to: keep(to),
        }
    }

    /// Returns true if neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Builds the selected filter values for this range.
    ///
    /// `from` yields a `Geq` value and `to` a `Leq` value, in that order.
    /// `name` keeps the raw input and `value` the normalized number. Bounds
    /// that are not numbers are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use refiners::{build_function_refinement_string, Filter, NumberRange};
    ///
    /// let range = NumberRange::new(Some("100"), Some("1000.0"));
    /// let filter = Filter::new("Price", range.to_filter_values());
    /// assert_eq!(
    ///     build_function_refinement_string(&[filter], false),
    ///     vec!["Price:range(100,1000)"]
    /// );
    /// ```
    pub fn to_filter_values(&self) -> Vec<FilterValue> {
        let bound = |raw: &Option<String>, operator: FilterValueOperator| {
            let raw = raw.as_deref()?;
            let value = normalize_number(raw)?;
            Some(FilterValue::with_operator(value, operator).named(raw))
        };

        [
            bound(&self.from, FilterValueOperator::Geq),
            bound(&self.to, FilterValueOperator::Leq),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Restores widget state for `filter_name` from one URL parameter.
    ///
    /// Recognised forms, tried in order:
    /// 1. `Name:range(from,to)`, `Name:range(from,max)`, `Name:range(min,to)`
    /// 2. a (percent-encoded) JSON array of filters, where the entry named
    ///    `filter_name` supplies `geq` / `leq` values (numeric operator codes
    ///    `4` / `5` are also understood)
    ///
    /// Returns `None` when the parameter holds no state for this filter.
    /// Malformed JSON is treated as no state.
    pub fn from_query_param(filter_name: &str, param: &str) -> Option<Self> {
        let restored = Self::from_range_expression(filter_name, param)
            .or_else(|| Self::from_json_filters(filter_name, param));
        if let Some(ref range) = restored {
            debug!(filter = filter_name, from = ?range.from, to = ?range.to, "Restored number range");
        }
        restored
    }

    /// Restores widget state from the first parameter that holds any.
    pub fn from_query_params<'a>(
        filter_name: &str,
        params: impl IntoIterator<Item = &'a str>,
    ) -> Option<Self> {
        params
            .into_iter()
            .find_map(|param| Self::from_query_param(filter_name, param))
    }

    fn from_range_expression(filter_name: &str, param: &str) -> Option<Self> {
        let name = format!("{}{}", NAME_BOUNDARY, regex::escape(filter_name));
        let patterns = [
            (format!(r"{}:range\({},{}\)", name, BOUND, BOUND), true, true),
            (format!(r"{}:range\({},max\)", name, BOUND), true, false),
            (format!(r"{}:range\(min,{}\)", name, BOUND), false, true),
        ];

        for (pattern, has_from, has_to) in patterns {
            let Ok(re) = Regex::new(&pattern) else {
                continue;
            };
            if let Some(caps) = re.captures(param) {
                let mut groups = caps.iter().skip(1).flatten().map(|m| m.as_str());
                let from = if has_from { groups.next() } else { None };
                let to = if has_to { groups.next() } else { None };
                return Some(Self::new(from, to));
            }
        }
        None
    }

    fn from_json_filters(filter_name: &str, param: &str) -> Option<Self> {
        let decoded = percent_decode_str(param).decode_utf8().ok()?;
        let decoded = decoded.trim();
        if !decoded.starts_with('[') {
            return None;
        }

        let filters: Vec<Value> = serde_json::from_str(decoded).ok()?;
        let filter = filters
            .iter()
            .find(|f| f.get("filterName").and_then(Value::as_str) == Some(filter_name))?;
        let values = filter.get("values")?.as_array()?;

        let mut range = Self::default();
        for value in values {
            let raw = value.get("value").and_then(raw_bound);
            match value.get("operator").and_then(operator_from_json) {
                Some(FilterValueOperator::Geq) => range.from = raw,
                Some(FilterValueOperator::Leq) => range.to = raw,
                _ => {}
            }
        }
        Some(range)
    }
}

/// Reads a bound as typed: strings verbatim, JSON numbers in their printed form.
fn raw_bound(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reads an operator tag, either by name or by the UI layer's numeric code.
fn operator_from_json(value: &Value) -> Option<FilterValueOperator> {
    match value {
        Value::String(name) => match name.to_ascii_lowercase().as_str() {
            "eq" => Some(FilterValueOperator::Eq),
            "gt" => Some(FilterValueOperator::Gt),
            "lt" => Some(FilterValueOperator::Lt),
            "geq" => Some(FilterValueOperator::Geq),
            "leq" => Some(FilterValueOperator::Leq),
            _ => None,
        },
        Value::Number(code) => match code.as_u64()? {
            0 => Some(FilterValueOperator::Eq),
            2 => Some(FilterValueOperator::Gt),
            3 => Some(FilterValueOperator::Lt),
            4 => Some(FilterValueOperator::Geq),
            5 => Some(FilterValueOperator::Leq),
            _ => None,
        },
        _ => None,
    }
}

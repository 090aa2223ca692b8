//! Value classification predicates shared by both dialects.
//!
//! Every string-matching decision the serializers make lives here behind a
//! named predicate, so [`kql`](super::kql) and [`fql`](super::fql) read as
//! policy. All predicates are locale-independent: dates are checked against
//! the proleptic Gregorian calendar, digits are ASCII only.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Marker carried by hex-encoded taxonomy tokens (`ǂǂ` followed by hex).
pub const TAXONOMY_TOKEN_MARKER: &str = "ǂǂ";

/// Encoded taxonomy token for a yes/no refiner's "true" entry.
pub const YES_NO_TRUE_TOKEN: &str = "\"ǂǂ54727565\"";

/// Encoded taxonomy token for a yes/no refiner's "false" entry.
pub const YES_NO_FALSE_TOKEN: &str = "\"ǂǂ46616c7365\"";

/// FQL placeholder for an empty value; a bare empty token is a syntax error.
pub const EMPTY_VALUE_LITERAL: &str = "string('')";

/// Filter name fragment identifying yes/no managed properties (case-insensitive).
pub const YES_NO_FILTER_MARKER: &str = "RefinableYesNo";

/// Filter name fragment identifying string-typed managed properties.
pub const STRING_FILTER_MARKER: &str = "RefinableString";

/// Calendar date with optional time of day and UTC offset.
static ISO_8601: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:T([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:\.[0-9]+)?)?(Z|[+-][0-9]{2}(?::?[0-9]{2})?)?)?$",
    )
    .expect("Invalid ISO-8601 regex")
});

static SIGNED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("Invalid decimal regex"));

/// `encodeURIComponent` leaves these unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Returns true if `value` is a full ISO-8601 calendar date or date-time.
///
/// Accepted: `YYYY-MM-DD`, optionally followed by `THH:mm`, `THH:mm:ss` or
/// `THH:mm:ss.fff`, then an optional `Z` or `±HH:mm` / `±HHmm` / `±HH`
/// offset. The date must exist (`2021-02-30` is rejected). Basic forms such
/// as `20210101`, week dates, ordinal dates, and bare years are rejected so
/// numeric-looking values are never mistaken for dates.
pub fn is_strict_iso8601(value: &str) -> bool {
    let Some(caps) = ISO_8601.captures(value) else {
        return false;
    };

    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let (Some(year), Some(month), Some(day)) = (
        caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok()),
        field(2),
        field(3),
    ) else {
        return false;
    };
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return false;
    }

    if let Some(hour) = field(4) {
        let minute = field(5).unwrap_or(0);
        let second = field(6).unwrap_or(0);
        if NaiveTime::from_hms_opt(hour, minute, second).is_none() {
            return false;
        }
    }

    match caps.get(7).map(|m| m.as_str()) {
        None | Some("Z") => true,
        Some(offset) => is_valid_offset(&offset[1..]),
    }
}

fn is_valid_offset(digits: &str) -> bool {
    let digits: String = digits.chars().filter(|c| *c != ':').collect();
    let hours = digits.get(0..2).and_then(|h| h.parse::<u32>().ok());
    let minutes = match digits.get(2..4) {
        Some(m) => m.parse::<u32>().ok(),
        None => Some(0),
    };
    matches!((hours, minutes), (Some(h), Some(m)) if h <= 23 && m <= 59)
}

/// Returns true for an optionally negative decimal number (`-12`, `3.50`).
pub fn is_signed_decimal(value: &str) -> bool {
    SIGNED_DECIMAL.is_match(value)
}

/// Returns true if `value` contains any Unicode whitespace.
pub fn contains_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Returns true if `value` carries the encoded taxonomy token marker.
pub fn is_taxonomy_encoded_marker(value: &str) -> bool {
    value.contains(TAXONOMY_TOKEN_MARKER)
}

/// Returns true for a non-empty run of ASCII digits.
pub fn is_digits_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `value` is already an FQL `range(...)` expression.
pub fn is_range_expression(value: &str) -> bool {
    value.starts_with("range(") && value.ends_with(')')
}

/// Returns true if the filter name denotes a yes/no managed property.
pub fn is_yes_no_filter(filter_name: &str) -> bool {
    filter_name
        .to_ascii_lowercase()
        .contains(&YES_NO_FILTER_MARKER.to_ascii_lowercase())
}

/// Returns true if the filter name denotes a string-typed managed property.
pub fn is_string_typed_filter(filter_name: &str) -> bool {
    filter_name.contains(STRING_FILTER_MARKER)
}

/// Percent-encodes `value` the way `encodeURIComponent` does (UTF-8 bytes).
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

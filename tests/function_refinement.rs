//! Integration tests for the FQL refinement serializer.
//!
//! Covers numeric range shortcuts, date ranges with explicit comparison
//! keywords, and/or conjunctions, and the value literal rules (empty
//! placeholder, yes/no sentinels, quoting, taxonomy token encoding).

use refiners::query::classify::{YES_NO_FALSE_TOKEN, YES_NO_TRUE_TOKEN};
use refiners::{
    build_function_refinement_string, combine_function_conditions, Filter, FilterValue,
    FilterValueOperator, JoinOperator,
};

/// Encoded taxonomy token as emitted by the term encoder ("Marketing").
const MARKETING_TOKEN: &str = "\"ǂǂ4d61726b6574696e67\"";

fn value(v: &str, operator: FilterValueOperator) -> FilterValue {
    FilterValue::with_operator(v, operator)
}

fn fql(filters: &[Filter]) -> Vec<String> {
    build_function_refinement_string(filters, false)
}

// ============================================================================
// Numeric shortcuts
// ============================================================================

#[test]
fn test_numeric_two_sided_range() {
    let f = Filter::new(
        "Price",
        vec![
            value("100", FilterValueOperator::Geq),
            value("1000", FilterValueOperator::Leq),
        ],
    );
    assert_eq!(fql(&[f]), vec!["Price:range(100,1000)"]);
}

#[test]
fn test_numeric_negative_and_decimal_bounds() {
    let f = Filter::new(
        "Temperature",
        vec![
            value("-10.5", FilterValueOperator::Geq),
            value("30", FilterValueOperator::Leq),
        ],
    );
    assert_eq!(fql(&[f]), vec!["Temperature:range(-10.5,30)"]);
}

#[test]
fn test_numeric_from_only() {
    let f = Filter::new("Price", vec![value("100", FilterValueOperator::Geq)]);
    assert_eq!(fql(&[f]), vec!["Price:range(100,max)"]);
}

#[test]
fn test_numeric_to_only() {
    let f = Filter::new("Price", vec![value("250", FilterValueOperator::Leq)]);
    assert_eq!(fql(&[f]), vec!["Price:range(min,250)"]);
}

#[test]
fn test_non_numeric_pair_is_not_a_numeric_range() {
    let f = Filter::new(
        "Size",
        vec![
            value("S", FilterValueOperator::Geq),
            value("XL", FilterValueOperator::Leq),
        ],
    );
    assert_eq!(fql(&[f]), vec!["Size:or(S,XL)"]);
}

#[test]
fn test_unselected_value_does_not_count_towards_pair() {
    let f = Filter::new(
        "Price",
        vec![
            value("100", FilterValueOperator::Geq),
            value("1000", FilterValueOperator::Leq).unselected(),
        ],
    );
    assert_eq!(fql(&[f]), vec!["Price:range(100,max)"]);
}

// ============================================================================
// Date ranges
// ============================================================================

#[test]
fn test_date_range_default_keywords() {
    let f = Filter::new(
        "LastModifiedTime",
        vec![
            value("2021-01-01T00:00:00Z", FilterValueOperator::Geq),
            value("2021-06-30T00:00:00Z", FilterValueOperator::Leq),
        ],
    );
    assert_eq!(
        fql(&[f]),
        vec!["LastModifiedTime:range(2021-01-01T00:00:00Z,2021-06-30T00:00:00Z,from=\"GE\",to=\"LE\")"]
    );
}

#[test]
fn test_date_range_strict_keywords() {
    let f = Filter::new(
        "Created",
        vec![
            value("2021-06-30", FilterValueOperator::Lt),
            value("2021-01-01", FilterValueOperator::Gt),
        ],
    );
    assert_eq!(
        fql(&[f]),
        vec!["Created:range(2021-01-01,2021-06-30,from=\"GT\",to=\"LT\")"]
    );
}

#[test]
fn test_single_sided_dates_fall_back_to_conjunction() {
    let f = Filter::new(
        "Created",
        vec![
            value("2021-01-01", FilterValueOperator::Geq),
            value("2022-01-01", FilterValueOperator::Gt),
        ],
    );
    assert_eq!(fql(&[f]), vec!["Created:or(2021-01-01,2022-01-01)"]);
}

#[test]
fn test_single_date_newer_than() {
    let f = Filter::new("Created", vec![value("2021-01-01T00:00:00Z", FilterValueOperator::Gt)]);
    assert_eq!(fql(&[f]), vec!["Created:range(2021-01-01T00:00:00Z,max)"]);
}

#[test]
fn test_single_date_older_than() {
    let f = Filter::new("Created", vec![value("2020-01-01", FilterValueOperator::Leq)]);
    assert_eq!(fql(&[f]), vec!["Created:range(min,2020-01-01)"]);
}

// ============================================================================
// Conjunctions and literals
// ============================================================================

#[test]
fn test_multi_value_and() {
    let f = Filter::new(
        "Tags",
        vec![FilterValue::new("rust"), FilterValue::new("search engines")],
    )
    .with_operator(JoinOperator::And);
    assert_eq!(fql(&[f]), vec!["Tags:and(rust,\"search engines\")"]);
}

#[test]
fn test_empty_value_placeholder_single() {
    let f = Filter::new("Department", vec![FilterValue::new("")]);
    assert_eq!(fql(&[f]), vec!["Department:string('')"]);
}

#[test]
fn test_empty_value_placeholder_multi() {
    let f = Filter::new("Department", vec![FilterValue::new(""), FilterValue::new("HR")]);
    assert_eq!(fql(&[f]), vec!["Department:or(string(''),HR)"]);
}

#[test]
fn test_yes_no_sentinels() {
    let yes = Filter::new("RefinableYesNo1", vec![FilterValue::new(YES_NO_TRUE_TOKEN)]);
    let no = Filter::new("RefinableYesNo1", vec![FilterValue::new(YES_NO_FALSE_TOKEN)]);
    assert_eq!(
        fql(&[yes, no]),
        vec!["RefinableYesNo1:true", "RefinableYesNo1:false"]
    );
}

#[test]
fn test_yes_no_both_selected() {
    let f = Filter::new(
        "RefinableYesNo02",
        vec![
            FilterValue::new(YES_NO_TRUE_TOKEN),
            FilterValue::new(YES_NO_FALSE_TOKEN),
        ],
    );
    assert_eq!(fql(&[f]), vec!["RefinableYesNo02:or(true,false)"]);
}

#[test]
fn test_string_typed_digits_quoted() {
    let f = Filter::new(
        "RefinableString05",
        vec![FilterValue::new("2021"), FilterValue::new("2022")],
    );
    assert_eq!(fql(&[f]), vec!["RefinableString05:or(\"2021\",\"2022\")"]);

    let single = Filter::new("RefinableString05", vec![FilterValue::new("42")]);
    assert_eq!(fql(&[single]), vec!["RefinableString05:\"42\""]);
}

#[test]
fn test_taxonomy_tokens_raw_for_post() {
    let f = Filter::new("owstaxIdDepartment", vec![FilterValue::new(MARKETING_TOKEN)]);
    assert_eq!(
        build_function_refinement_string(&[f], false),
        vec![format!("owstaxIdDepartment:{}", MARKETING_TOKEN)]
    );
}

#[test]
fn test_taxonomy_tokens_encoded_for_get() {
    let f = Filter::new(
        "owstaxIdDepartment",
        vec![FilterValue::new(MARKETING_TOKEN), FilterValue::new("L0|#0abc")],
    );
    assert_eq!(
        build_function_refinement_string(&[f], true),
        vec!["owstaxIdDepartment:or(%22%C7%82%C7%824d61726b6574696e67%22,L0|#0abc)"]
    );
}

// ============================================================================
// Result shape
// ============================================================================

#[test]
fn test_unselected_filters_omitted() {
    let filters = vec![
        Filter::new("Color", vec![FilterValue::new("Red").unselected()]),
        Filter::new("Size", vec![FilterValue::new("L")]),
        Filter::new("Brand", vec![]),
    ];
    assert_eq!(fql(&filters), vec!["Size:L"]);
}

#[test]
fn test_combined_with_and() {
    let filters = vec![
        Filter::new("Size", vec![FilterValue::new("L")]),
        Filter::new("Price", vec![value("5", FilterValueOperator::Geq)]),
    ];
    let conditions = fql(&filters);
    assert_eq!(
        combine_function_conditions(&conditions).as_deref(),
        Some("and(Size:L,Price:range(5,max))")
    );
}

#[test]
fn test_repeat_calls_identical() {
    let filters = vec![
        Filter::new("owstaxIdDepartment", vec![FilterValue::new(MARKETING_TOKEN)]),
        Filter::new("Price", vec![value("5", FilterValueOperator::Geq)]),
    ];
    for encode in [false, true] {
        assert_eq!(
            build_function_refinement_string(&filters, encode),
            build_function_refinement_string(&filters, encode)
        );
    }
}

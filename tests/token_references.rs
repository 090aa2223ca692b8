//! Integration tests for template token references.
//!
//! The scanner returns the filter whose name a `{filters.<name>}` token
//! matched, in order of first reference, without duplicates.

use refiners::{find_referenced_filters, Filter, FilterValue};

fn selected() -> Vec<Filter> {
    vec![
        Filter::new("Color", vec![FilterValue::new("Red")]),
        Filter::new("Size", vec![FilterValue::new("L")]),
    ]
}

fn names<'a>(filters: &[&'a Filter]) -> Vec<&'a str> {
    filters.iter().map(|f| f.filter_name.as_str()).collect()
}

#[test]
fn test_two_referenced_filters_each_once() {
    let filters = selected();
    let found = find_referenced_filters(
        &filters,
        "{filters.Color} and {filters.Size} and again {filters.Color}",
    );
    assert_eq!(names(&found), vec!["Color", "Size"]);
}

#[test]
fn test_unselected_reference_ignored() {
    let filters = selected();
    let found = find_referenced_filters(&filters, "{filters.Brand} {filters.Size}");
    assert_eq!(names(&found), vec!["Size"]);
}

#[test]
fn test_order_of_first_reference() {
    let filters = selected();
    let found = find_referenced_filters(&filters, "{filters.Size}{filters.Color}");
    assert_eq!(names(&found), vec!["Size", "Color"]);
}

#[test]
fn test_matched_filter_returned_even_when_not_first() {
    let filters = selected();
    let found = find_referenced_filters(&filters, "{filters.Size.valueAsText}");
    assert_eq!(found.len(), 1);
    assert!(std::ptr::eq(found[0], &filters[1]));
    assert_eq!(found[0].values[0].value, "L");
}

#[test]
fn test_other_tokens_ignored() {
    let filters = selected();
    let found = find_referenced_filters(
        &filters,
        "{searchTerms} {Page.Title} {?{User.Name}} path:{Site.URL}",
    );
    assert!(found.is_empty());
}

#[test]
fn test_no_selected_filters() {
    let found = find_referenced_filters(&[], "{filters.Color}");
    assert!(found.is_empty());
}

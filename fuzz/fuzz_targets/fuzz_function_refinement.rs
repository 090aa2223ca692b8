#![no_main]

use libfuzzer_sys::fuzz_target;
use refiners::{
    build_function_refinement_string, build_keyword_refinement_string, Filter, FilterValue,
    FilterValueOperator,
};

const OPERATORS: [FilterValueOperator; 5] = [
    FilterValueOperator::Eq,
    FilterValueOperator::Geq,
    FilterValueOperator::Gt,
    FilterValueOperator::Leq,
    FilterValueOperator::Lt,
];

// Each line is one value; its length picks the operator.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let values: Vec<FilterValue> = text
        .lines()
        .map(|line| {
            let op = OPERATORS[line.len() % OPERATORS.len()];
            FilterValue::with_operator(line, op)
        })
        .collect();

    let filters = vec![
        Filter::new("RefinableString01", values.clone()),
        Filter::new("RefinableYesNo1", values),
    ];

    let raw = build_function_refinement_string(&filters, false);
    let encoded = build_function_refinement_string(&filters, true);
    assert_eq!(raw.len(), encoded.len());
    let _ = build_keyword_refinement_string(&filters);
});

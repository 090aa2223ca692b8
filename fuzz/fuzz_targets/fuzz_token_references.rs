#![no_main]

use libfuzzer_sys::fuzz_target;
use refiners::{find_referenced_filters, Filter};

fuzz_target!(|template: &str| {
    let selected = vec![Filter::new("Color", vec![]), Filter::new("Size", vec![])];
    let found = find_referenced_filters(&selected, template);
    assert!(found.len() <= selected.len());
});

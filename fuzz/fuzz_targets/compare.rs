#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (left, right) = data;

    let joined: String = flexver::decompose(left)
        .iter()
        .map(flexver::Component::as_str)
        .collect();
    assert_eq!(joined, flexver::split_build_metadata(left).0);

    assert!(flexver::compare(left, left).is_eq());
    assert_eq!(
        flexver::compare(left, right),
        flexver::compare(right, left).reverse()
    );
});

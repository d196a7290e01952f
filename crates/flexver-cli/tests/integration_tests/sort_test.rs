use crate::common::{FlexverOutput, FlexverTest};
use insta::assert_snapshot;

impl FlexverTest {
    pub fn sort(&self, args: &[&str]) -> FlexverOutput {
        self.flexver(&[&["sort"], args].concat())
    }
}

#[test]
fn test_sort_arguments() {
    let test = FlexverTest::new();
    let output = test.sort(&["1.10", "1.9", "1.9-rc"]);

    output.assert_success();
    assert_snapshot!(output.stdout().trim_end(), @r"
    1.9-rc
    1.9
    1.10
    ");
}

#[test]
fn test_sort_reverse() {
    let test = FlexverTest::new();
    let output = test.sort(&["--reverse", "b1.7.3", "a1.2.6", "b1.2.6"]);

    output.assert_success();
    assert_eq!(output.stdout(), "b1.7.3\nb1.2.6\na1.2.6\n");
}

#[test]
fn test_sort_stdin() {
    let test = FlexverTest::new();
    let output = test.flexver_with_stdin(&["sort"], "18w40b\n14w16a\n\n18w40a\n");

    output.assert_success();
    assert_eq!(output.stdout(), "14w16a\n18w40a\n18w40b\n");
}

#[test]
fn test_sort_json() {
    let test = FlexverTest::new();
    let output = test.sort(&["--format", "json", "1.0", "0.9+build"]);

    output.assert_success();
    let sorted: Vec<String> = serde_json::from_str(&output.stdout()).unwrap();
    assert_eq!(sorted, vec!["0.9+build", "1.0"]);
}

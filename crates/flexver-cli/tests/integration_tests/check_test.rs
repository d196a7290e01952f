use crate::common::FlexverTest;
use insta::assert_snapshot;

#[test]
fn test_check_passing_file() {
    let test = FlexverTest::new();
    test.write_file(
        "vectors.txt",
        "# Basic numeric ordering\n10 > 2\n\n1.0 < 1.0.1 # padding\n1.5 = 1.5+foobar\n",
    );
    let output = test.flexver(&["check", "vectors.txt"]);

    output.assert_success();
    assert_snapshot!(output.stdout().trim_end(), @"3 test vectors passed");
}

#[test]
fn test_check_multiple_files() {
    let test = FlexverTest::new();
    test.write_file("a.txt", "1.0 < 1.1\n");
    test.write_file("b.txt", " = \n1 > \n");
    let output = test.flexver(&["check", "a.txt", "b.txt"]);

    output.assert_success();
    assert_eq!(output.stdout(), "3 test vectors passed\n");
}

#[test]
fn test_check_reports_failures() {
    let test = FlexverTest::new();
    test.write_file("vectors.txt", "10 < 2\n1.0 < 1.0.1\n");
    let output = test.flexver(&["check", "vectors.txt"]);

    output.assert_failure();
    assert_snapshot!(output.stdout().trim_end(), @"vectors.txt:1: expected `10 < 2`, got `10 > 2`");
    assert!(
        output.stderr().contains("1 of 2 test vectors failed"),
        "unexpected stderr: {}",
        output.stderr()
    );
}

#[test]
fn test_check_malformed_file() {
    let test = FlexverTest::new();
    test.write_file("vectors.txt", "10 2\n");
    let output = test.flexver(&["check", "vectors.txt"]);

    output.assert_failure();
    assert!(
        output
            .stderr()
            .contains("Invalid test vector file vectors.txt"),
        "unexpected stderr: {}",
        output.stderr()
    );
}

#[test]
fn test_check_missing_file() {
    let test = FlexverTest::new();
    let output = test.flexver(&["check", "missing.txt"]);

    output.assert_failure();
    assert!(output.stdout().is_empty());
}

#[test]
fn test_check_requires_files() {
    let test = FlexverTest::new();
    let output = test.flexver(&["check"]);

    output.assert_failure();
}

#[test]
fn test_check_library_fixture() {
    let fixture = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../flexver/tests/fixtures/test_vectors.txt"
    );
    let test = FlexverTest::new();
    let output = test.flexver(&["check", fixture]);

    output.assert_success();
    assert!(output.stdout().ends_with("test vectors passed\n"));
}

use std::fs;

use radix::{convert, error::ConvertError, get_result};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (input, expected) in extract_cases(&content) {
            count += 1;
            let actual = match get_result(&input) {
                Ok(number) => number,
                Err(e) => e.to_string(),
            };
            assert_eq!(actual, expected, "case [{input}] in {path:?}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once("=>"))
           .map(|(input, expected)| (input.trim().to_string(), expected.trim().to_string()))
           .collect()
}

fn assert_converts(input: &str, expected: &str) {
    match get_result(input) {
        Ok(number) => assert_eq!(number, expected, "input [{input}]"),
        Err(e) => panic!("Conversion of [{input}] failed: {e}"),
    }
}

fn assert_failure(input: &str) -> ConvertError {
    get_result(input).expect_err("Conversion succeeded but was expected to fail")
}

#[test]
fn reads_tokens_across_lines() {
    assert_converts("10\n255\n16\n", "ff");
    assert_converts("  16\tff   10  ", "255");
}

#[test]
fn extra_tokens_are_ignored() {
    assert_converts("10 255 16 and more", "ff");
}

#[test]
fn source_radix_is_checked_before_number() {
    assert!(matches!(assert_failure("37 zz 99"), ConvertError::InvalidRadix { token } if token == "37"));
}

#[test]
fn number_is_checked_before_target_radix() {
    assert!(matches!(assert_failure("2 12 99"), ConvertError::InvalidNumber { token } if token == "12"));
    assert!(matches!(assert_failure("2 11 99"), ConvertError::InvalidRadix { token } if token == "99"));
}

#[test]
fn missing_tokens_are_reported_in_order() {
    assert_eq!(assert_failure(""), ConvertError::MissingToken { expected: "source radix" });
    assert_eq!(assert_failure("10"), ConvertError::MissingToken { expected: "number" });
    assert_eq!(assert_failure("10 5"), ConvertError::MissingToken { expected: "target radix" });
}

#[test]
fn separate_tokens_match_whitespace_input() {
    for (source, number, target) in [("10", "255", "16"), ("2", "0.1", "10"), ("1", "111", "36")] {
        assert_eq!(convert(source, number, target),
                   get_result(&format!("{source} {number} {target}")));
    }
}

#[test]
fn every_radix_reads_its_largest_digit() {
    for radix in 2..=36_u32 {
        let digit = char::from_digit(radix - 1, radix).unwrap();
        let expected = (radix - 1).to_string();
        assert_converts(&format!("{radix} {digit} 10"), &expected);
    }
}

#[test]
fn integers_round_trip_between_radices() {
    for source in 2..=36_u32 {
        for target in [1_u32, 2, 3, 10, 16, 36] {
            for value in ["0", "1", "7", "100", "12345"] {
                let there = convert("10", value, &source.to_string()).unwrap();
                let across = convert(&source.to_string(), &there, &target.to_string()).unwrap();
                if target == 1 && value == "0" {
                    // an empty unary string cannot be read back
                    assert_eq!(across, "");
                } else {
                    let back = convert(&target.to_string(), &across, "10").unwrap();
                    assert_eq!(back, value, "{value} via radix {source} and {target}");
                }
            }
        }
    }
}

#[test]
fn fractions_round_trip_within_truncation() {
    let values = ["3.25", "0.1", "0.333", "0.5", "0.99999", "12.7"];

    for radix in [2_u32, 3, 7, 8, 10, 16, 35, 36] {
        // one truncation into `radix`, one back into base 10
        let tolerance = f64::from(radix).powi(-5) + 1e-5 + 1e-9;

        for value in values {
            let there = convert("10", value, &radix.to_string()).unwrap();
            let back = convert(&radix.to_string(), &there, "10").unwrap();

            let (integer, _) = value.split_once('.').unwrap();
            let (back_integer, _) = back.split_once('.').unwrap();
            assert_eq!(back_integer, integer, "{value} via radix {radix} came back as {back}");

            let expected: f64 = value.parse().unwrap();
            let actual: f64 = back.parse().unwrap();
            assert!(expected - actual < tolerance && actual <= expected + 1e-9,
                    "{value} via radix {radix} came back as {back}");
        }
    }
}

#[test]
fn long_runs_of_largest_digit_keep_every_rendered_digit() {
    assert_converts("10 5.99999999999999999999 10", "5.99999");
    assert_converts("16 0.fffffffffffffffff 16", "0.fffff");
    assert_converts("36 1.zzzzzzzzzzzzzzzzzzzz 36", "1.zzzzz");
}

#[test]
fn unary_target_past_native_int_is_an_error() {
    assert_eq!(convert("10", "18446744073709551615", "1"),
               Err(ConvertError::UnaryTooLong { value: u64::MAX }));
    assert_eq!(convert("10", "2147483648", "1"),
               Err(ConvertError::UnaryTooLong { value: 2_147_483_648 }));
    assert_eq!(convert("16", "e8d4a51000", "1"),
               Err(ConvertError::UnaryTooLong { value: 1_000_000_000_000 }));
}

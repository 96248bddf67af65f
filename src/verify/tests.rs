//! Tests for the verification pipeline.

use super::*;
use crate::call::{Expectation, Invocation, MethodSig, Param};
use crate::double::{Introspect, RecordingDouble};
use crate::matchers::{any, eq};
use serde_json::json;

fn add_sig() -> MethodSig {
    MethodSig::new("Add", vec![Param::new("i32", "a"), Param::new("i32", "b")])
}

fn multiply_sig() -> MethodSig {
    MethodSig::new(
        "Multiply",
        vec![Param::new("i32", "a"), Param::new("i32", "b")],
    )
}

#[test]
fn test_no_expectations_is_an_error() {
    let double = RecordingDouble::new();
    double.record(add_sig(), vec![json!(1), json!(2)]);

    let result = verify_all(&double);
    assert!(matches!(result, Err(VerifyError::NoExpectationsConfigured)));
}

#[test]
fn test_zero_count_rejected_before_matching() {
    /// A double whose history must never be consulted.
    struct Untouchable;

    impl crate::double::Introspect for Untouchable {
        fn configured_calls(&self) -> Option<Vec<Expectation>> {
            panic!("configuration read before argument validation");
        }

        fn received_calls(&self) -> Vec<Invocation> {
            panic!("history read before argument validation");
        }
    }

    let result = verify_all_times(&Untouchable, 0);
    match result {
        Err(VerifyError::InvalidArgument { parameter, .. }) => {
            assert_eq!(parameter, "max_calls_per_invocation");
        }
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_not_a_double_is_a_setup_defect() {
    struct PlainObject;

    impl crate::double::Introspect for PlainObject {
        fn configured_calls(&self) -> Option<Vec<Expectation>> {
            None
        }

        fn received_calls(&self) -> Vec<Invocation> {
            Vec::new()
        }
    }

    let result = verify_all(&PlainObject);
    assert!(matches!(result, Err(VerifyError::ConfigurationNotFound)));
}

#[test]
fn test_single_expectation_exercised_once() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    assert!(verify_all(&double).is_ok());
    assert!(verify_all_times(&double, 1).is_ok());
}

#[test]
fn test_exact_count_catches_under_calling() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    let result = verify_all_times(&double, 2);
    match result {
        Err(VerifyError::VerificationFailed { report }) => {
            assert!(report.contains("configured, but not received"));
            assert!(report.contains("Add(i32 a, i32 b)"));
        }
        other => panic!("expected VerificationFailed, got {other:?}"),
    }
}

#[test]
fn test_exact_count_catches_over_calling() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    assert!(verify_all(&double).is_ok());
    assert!(verify_all_times(&double, 2).is_ok());
    assert!(verify_all_times(&double, 1).is_err());
}

#[test]
fn test_missed_expectation_on_same_method() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.expect_call(add_sig(), vec![eq(2), eq(3)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    let result = verify_all(&double);
    match result {
        Err(VerifyError::VerificationFailed { report }) => {
            assert!(report.contains("configured, but not received"));
            assert!(report.contains("Add(i32 a, i32 b)"));
        }
        other => panic!("expected VerificationFailed, got {other:?}"),
    }
}

#[test]
fn test_missed_expectation_on_other_method() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.expect_call(multiply_sig(), vec![eq(2), eq(3)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    let result = verify_all(&double);
    match result {
        Err(VerifyError::VerificationFailed { report }) => {
            assert!(report.contains("Multiply(i32 a, i32 b)"));
            assert!(!report.contains("received, but not configured"));
        }
        other => panic!("expected VerificationFailed, got {other:?}"),
    }
}

#[test]
fn test_unconfigured_call_is_reported() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);
    double.record(multiply_sig(), vec![json!(5), json!(5)]);

    let result = verify_all(&double);
    match result {
        Err(VerifyError::VerificationFailed { report }) => {
            assert!(report.contains("received, but not configured"));
            assert!(report.contains("Multiply(i32 a, i32 b)"));
            assert!(!report.contains("configured, but not received"));
        }
        other => panic!("expected VerificationFailed, got {other:?}"),
    }
}

#[test]
fn test_arguments_outside_every_matcher_are_unmatched() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.record(add_sig(), vec![json!(9), json!(9)]);

    let outcome = match_calls(
        &double.configured_calls().unwrap(),
        &double.received_calls(),
        None,
    );
    assert_eq!(outcome.missed.len(), 1);
    assert_eq!(outcome.unmatched.len(), 1);
    assert!(outcome.satisfied.is_empty());
}

#[test]
fn test_overlapping_expectations_require_all_to_match() {
    // Strict policy: with two expectations on Add, a call matching only one
    // of them is unconfigured.
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.expect_call(add_sig(), vec![eq(2), eq(3)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    let outcome = match_calls(
        &double.configured_calls().unwrap(),
        &double.received_calls(),
        None,
    );
    assert_eq!(outcome.unmatched.len(), 1);
}

#[test]
fn test_overlapping_expectations_satisfied_by_wildcards() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.expect_call(add_sig(), vec![any(), any()]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    assert!(verify_all(&double).is_ok());
}

#[test]
fn test_arity_mismatch_is_a_non_match() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![any(), any()]);
    double.record(add_sig(), vec![json!(1)]);

    let outcome = match_calls(
        &double.configured_calls().unwrap(),
        &double.received_calls(),
        None,
    );
    assert_eq!(outcome.missed.len(), 1);
    assert_eq!(outcome.unmatched.len(), 1);
}

#[test]
fn test_matchers_never_cross_method_boundaries() {
    // A Multiply matcher that would match Add's arguments must never be asked.
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.expect_call(
        multiply_sig(),
        vec![
            crate::matchers::predicate(|_| panic!("matcher consulted across methods")),
            any(),
        ],
    );
    double.record(add_sig(), vec![json!(1), json!(2)]);

    let _ = verify_all(&double);
}

#[test]
fn test_verification_is_idempotent() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.expect_call(multiply_sig(), vec![eq(2), eq(3)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    let first = format!("{:?}", verify_all(&double));
    let second = format!("{:?}", verify_all(&double));
    assert_eq!(first, second);
}

#[test]
fn test_report_shape_is_exact() {
    let double = RecordingDouble::new();
    double.expect_call(multiply_sig(), vec![eq(2), eq(3)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    match verify_all(&double) {
        Err(VerifyError::VerificationFailed { report }) => {
            let expected = [
                "The following calls were configured, but not received",
                "  Multiply(i32 a, i32 b)",
                "",
                "The following calls were received, but not configured",
                "  Add(i32 a, i32 b)",
            ]
            .join("\n");
            assert_eq!(report, expected);
        }
        other => panic!("expected VerificationFailed, got {other:?}"),
    }
}

#[test]
fn test_ext_trait_mirrors_free_functions() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);
    double.record(add_sig(), vec![json!(1), json!(2)]);

    assert!(double.verify_all().is_ok());
    assert!(double.verify_all_times(1).is_ok());
    double.assert_verified();
    double.assert_verified_times(1);
}

#[test]
#[should_panic(expected = "configured, but not received")]
fn test_assert_verified_panics_with_report() {
    let double = RecordingDouble::new();
    double.expect_call(add_sig(), vec![eq(1), eq(2)]);

    double.assert_verified();
}

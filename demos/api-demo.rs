//! Walkthrough of the verification API: configure a double, run a fake system
//! under test against it, then verify.
//!
//! Run with: cargo run --example api-demo

use doublecheck::matchers::{any, eq, pattern};
use doublecheck::{Introspect, MethodSig, Param, RecordingDouble, VerifyAll, VerifyError};
use serde_json::json;

/// Stand-in for production code that talks to a repository dependency.
fn run_system_under_test(repo: &RecordingDouble) {
    repo.record(
        MethodSig::new("Load", vec![Param::new("String", "path")]),
        vec![json!("config/app.json")],
    );
    repo.record(
        MethodSig::new(
            "Store",
            vec![Param::new("String", "path"), Param::new("u64", "bytes")],
        ),
        vec![json!("out/result.json"), json!(142)],
    );
    // An extra call nobody configured.
    repo.record(
        MethodSig::new("Delete", vec![Param::new("String", "path")]),
        vec![json!("out/stale.json")],
    );
}

fn main() -> anyhow::Result<()> {
    // Example 1: the happy path.
    println!("=== Used exactly as configured ===");
    let repo = RecordingDouble::new();
    repo.expect_call(
        MethodSig::new("Load", vec![Param::new("String", "path")]),
        vec![pattern("config/*.json")],
    );
    repo.record(
        MethodSig::new("Load", vec![Param::new("String", "path")]),
        vec![json!("config/app.json")],
    );
    println!(
        "verify_all: {}",
        if repo.verify_all().is_ok() { "PASS" } else { "FAIL" }
    );

    // Example 2: a consolidated failure report.
    println!("\n=== Missed and unconfigured calls ===");
    let repo = RecordingDouble::new();
    repo.expect_call(
        MethodSig::new("Load", vec![Param::new("String", "path")]),
        vec![pattern("config/*.json")],
    );
    repo.expect_call(
        MethodSig::new(
            "Store",
            vec![Param::new("String", "path"), Param::new("u64", "bytes")],
        ),
        vec![eq("out/result.json"), any()],
    );
    repo.expect_call(
        MethodSig::new("Flush", vec![]),
        vec![],
    );

    run_system_under_test(&repo);

    match repo.verify_all() {
        Ok(()) => println!("verify_all: PASS"),
        Err(err) => println!("verify_all: FAIL\n{err}"),
    }

    // Example 3: exact call counts catch accidental duplicates.
    println!("\n=== Exact call counts ===");
    let counter = RecordingDouble::new();
    let tick = MethodSig::new("Tick", vec![Param::new("u32", "step")]);
    counter.expect_call(tick.clone(), vec![any()]);
    counter.record(tick.clone(), vec![json!(1)]);
    counter.record(tick.clone(), vec![json!(2)]);

    println!(
        "verify_all:          {}",
        if counter.verify_all().is_ok() { "PASS" } else { "FAIL" }
    );
    println!(
        "verify_all_times(2): {}",
        if counter.verify_all_times(2).is_ok() { "PASS" } else { "FAIL" }
    );
    println!(
        "verify_all_times(1): {}",
        if counter.verify_all_times(1).is_ok() { "PASS" } else { "FAIL" }
    );

    // Example 4: usage errors are distinct from verification failures.
    println!("\n=== Usage errors ===");
    struct NotADouble;

    impl Introspect for NotADouble {
        fn configured_calls(&self) -> Option<Vec<doublecheck::Expectation>> {
            None
        }

        fn received_calls(&self) -> Vec<doublecheck::Invocation> {
            Vec::new()
        }
    }

    if let Err(err @ VerifyError::ConfigurationNotFound) = NotADouble.verify_all() {
        println!("not a double: {err}");
    }

    let unconfigured = RecordingDouble::new();
    if let Err(err @ VerifyError::NoExpectationsConfigured) = unconfigured.verify_all() {
        println!("nothing configured: {err}");
    }

    Ok(())
}

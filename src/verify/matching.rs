//! Call matching: partitions configured expectations and observed invocations
//! into satisfied, missed, and unmatched sets.

use crate::call::{Expectation, Invocation, VerificationOutcome};

/// Match observed invocations against the configured expectations.
///
/// Never fails and mutates nothing; the caller decides what the outcome means.
/// `exact_call_count`, when set, must already be validated (`>= 1`) by the
/// entry point.
pub fn match_calls(
    expectations: &[Expectation],
    observed: &[Invocation],
    exact_call_count: Option<usize>,
) -> VerificationOutcome {
    let mut outcome = VerificationOutcome::default();

    for expectation in expectations {
        if expectation_met(expectation, observed, exact_call_count) {
            outcome.satisfied.push(expectation.clone());
        } else {
            outcome.missed.push(expectation.clone());
        }
    }

    for invocation in observed {
        if !is_configured(invocation, expectations) {
            outcome.unmatched.push(invocation.clone());
        }
    }

    outcome
}

/// Whether `expectation` was exercised: at least once by default, or exactly
/// `exact_call_count` times when set. In exact-count mode both under- and
/// over-calling are misses.
fn expectation_met(
    expectation: &Expectation,
    observed: &[Invocation],
    exact_call_count: Option<usize>,
) -> bool {
    let matches = observed
        .iter()
        .filter(|call| call.method() == expectation.method())
        .filter(|call| args_match(expectation, call))
        .count();

    match exact_call_count {
        None => matches > 0,
        Some(expected) => matches == expected,
    }
}

/// Whether `invocation` falls inside the configured set.
///
/// When several expectations target the same method, the call must satisfy
/// every one of them. A looser satisfies-at-least-one policy would also be
/// defensible; changing it means accepting the first `args_match` hit here.
fn is_configured(invocation: &Invocation, expectations: &[Expectation]) -> bool {
    let mut saw_method = false;
    for expectation in expectations
        .iter()
        .filter(|e| e.method() == invocation.method())
    {
        saw_method = true;
        if !args_match(expectation, invocation) {
            return false;
        }
    }
    saw_method
}

/// Positional argument match: the argument list must have exactly one value
/// per matcher and every matcher must accept its value. A length mismatch is a
/// non-match, never an error. Matchers are only ever consulted here, after the
/// method-identity filter upstream.
fn args_match(expectation: &Expectation, invocation: &Invocation) -> bool {
    let matchers = expectation.matchers();
    let args = invocation.args();
    if args.len() != matchers.len() {
        return false;
    }

    matchers
        .iter()
        .zip(args)
        .all(|(matcher, arg)| matcher.satisfied_by(arg))
}

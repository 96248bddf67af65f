//! Post-hoc verification of a test double's usage.
//!
//! The pipeline runs once per verification request: extract the configured
//! expectations from the double, snapshot its invocation history, match the
//! two sets, and either return silently or fail with one consolidated report
//! covering every discrepancy found in that pass.
//!
//! # Example
//!
//! ```rust,ignore
//! use doublecheck::matchers::eq;
//! use doublecheck::{MethodSig, Param, RecordingDouble, VerifyAll};
//!
//! let double = RecordingDouble::new();
//! double.expect_call(
//!     MethodSig::new("Add", vec![Param::new("i32", "a"), Param::new("i32", "b")]),
//!     vec![eq(1), eq(2)],
//! );
//!
//! // ... system under test runs against the double ...
//!
//! double.verify_all()?;
//! ```

mod extract;
mod matching;
mod report;

#[cfg(test)]
mod tests;

pub use matching::match_calls;

use crate::double::Introspect;

/// Errors surfaced by verification.
///
/// All variants are returned synchronously to the immediate caller and never
/// caught or retried internally: either the whole verification passes or it
/// fails with one of these.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// A caller-supplied parameter violated its precondition. Detected before
    /// any extraction or matching work.
    #[error("invalid argument `{parameter}`: {message}")]
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    /// The target object exposes no configuration store; it is not a
    /// verifiable double. A setup defect, not a verification failure.
    #[error("cannot verify: object does not look like a test double (no configuration store found)")]
    ConfigurationNotFound,

    /// The double is valid but has zero configured calls. Verifying nothing
    /// is almost always a test-authoring mistake, so it never silently passes.
    #[error("cannot verify double usage: no configured calls found")]
    NoExpectationsConfigured,

    /// The substantive failure: expectations were missed and/or unconfigured
    /// calls were observed. Carries the full rendered report.
    #[error("expected to have been used only as configured:\n{report}")]
    VerificationFailed { report: String },
}

/// Verify that every call configured on `double` was received at least once,
/// and that no unconfigured calls were received.
///
/// Read-only with respect to the double: each call takes fresh snapshots, so
/// verifying the same double repeatedly is idempotent.
pub fn verify_all(double: &dyn Introspect) -> Result<(), VerifyError> {
    verify(double, None)
}

/// Like [`verify_all`], but every configured call must have been received
/// exactly `max_calls_per_invocation` times, catching accidental duplicate
/// calls as well as missing ones.
///
/// `max_calls_per_invocation < 1` is rejected before any matching occurs.
pub fn verify_all_times(
    double: &dyn Introspect,
    max_calls_per_invocation: usize,
) -> Result<(), VerifyError> {
    if max_calls_per_invocation < 1 {
        return Err(VerifyError::InvalidArgument {
            parameter: "max_calls_per_invocation",
            message: "cannot be < 1".to_string(),
        });
    }

    verify(double, Some(max_calls_per_invocation))
}

fn verify(double: &dyn Introspect, exact_call_count: Option<usize>) -> Result<(), VerifyError> {
    let expectations = extract::snapshot_expectations(double)?;
    if expectations.is_empty() {
        return Err(VerifyError::NoExpectationsConfigured);
    }

    let observed = double.received_calls();
    let outcome = match_calls(&expectations, &observed, exact_call_count);
    if outcome.passed() {
        return Ok(());
    }

    Err(VerifyError::VerificationFailed {
        report: report::render(&outcome.missed, &outcome.unmatched),
    })
}

/// Method-call sugar for [`verify_all`] / [`verify_all_times`], available on
/// every [`Introspect`] implementor.
pub trait VerifyAll: Introspect {
    /// See [`verify_all`].
    fn verify_all(&self) -> Result<(), VerifyError>;

    /// See [`verify_all_times`].
    fn verify_all_times(&self, max_calls_per_invocation: usize) -> Result<(), VerifyError>;

    /// Terminal assertion form of [`verify_all`] for use inside tests.
    ///
    /// # Panics
    ///
    /// Panics with the full failure report when verification fails.
    fn assert_verified(&self) {
        if let Err(err) = self.verify_all() {
            panic!("{err}");
        }
    }

    /// Terminal assertion form of [`verify_all_times`] for use inside tests.
    ///
    /// # Panics
    ///
    /// Panics with the full failure report when verification fails.
    fn assert_verified_times(&self, max_calls_per_invocation: usize) {
        if let Err(err) = self.verify_all_times(max_calls_per_invocation) {
            panic!("{err}");
        }
    }
}

impl<T: Introspect> VerifyAll for T {
    fn verify_all(&self) -> Result<(), VerifyError> {
        verify_all(self)
    }

    fn verify_all_times(&self, max_calls_per_invocation: usize) -> Result<(), VerifyError> {
        verify_all_times(self, max_calls_per_invocation)
    }
}

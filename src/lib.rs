//! # doublecheck
//!
//! Post-hoc verification for test doubles: after the system under test has
//! run, assert that *every* call configured on a double was received, and
//! that the double was used *only* as configured.
//!
//! Test code configures expected calls (method identity plus per-argument
//! matchers) on a double, the code under test invokes some subset of them,
//! and a single `verify_all` call then reports every missed expectation and
//! every unconfigured invocation in one consolidated failure message.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use doublecheck::matchers::eq;
//! use doublecheck::{MethodSig, Param, RecordingDouble, VerifyAll};
//!
//! #[test]
//! fn calculator_uses_the_adder_exactly_as_configured() {
//!     let adder = RecordingDouble::new();
//!     adder.expect_call(
//!         MethodSig::new("Add", vec![Param::new("i32", "a"), Param::new("i32", "b")]),
//!         vec![eq(1), eq(2)],
//!     );
//!
//!     run_system_under_test(&adder);
//!
//!     adder.verify_all().unwrap();
//! }
//! ```
//!
//! ## Exact call counts
//!
//! The default mode checks "at least once" per expectation. Passing a count
//! checks for an *exact* number of matching calls, catching accidental
//! duplicates:
//!
//! ```rust,ignore
//! adder.verify_all_times(1)?; // fails if Add(1, 2) arrived twice
//! ```
//!
//! ## Verifying other mock frameworks
//!
//! The engine never touches a double's internals directly; it reads through
//! the [`Introspect`] seam. Implement that trait once against your mock
//! framework's extension points and `verify_all` works unchanged.

pub mod call;
pub mod double;
pub mod matchers;
pub mod verify;

// Core types
pub use call::{Expectation, Invocation, MethodSig, Param, VerificationOutcome};

// Introspection seam + reference double
pub use double::{Introspect, RecordingDouble};

// Matcher capability
pub use matchers::ArgMatcher;

// Verification entry points
pub use verify::{verify_all, verify_all_times, VerifyAll, VerifyError};

//! The introspection seam between the verification engine and a test double,
//! plus a minimal recording double for wiring tests together.
//!
//! Reading a mock framework's configuration store is the one genuinely fragile
//! dependency in call verification, so it is isolated behind [`Introspect`]:
//! the pipeline depends only on this trait, and one adapter per target
//! framework implements it against whatever extension points that framework
//! offers.

use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::call::{Expectation, Invocation, MethodSig};
use crate::matchers::ArgMatcher;

/// Read-only introspection surface a double must expose to be verifiable.
///
/// Both methods return snapshots; verification never mutates the double, so
/// repeated verification calls against the same double are idempotent.
pub trait Introspect {
    /// Snapshot of the currently configured expectations, in configuration
    /// order, or `None` when the object exposes no recognizable configuration
    /// store (it is not a verifiable double at all).
    fn configured_calls(&self) -> Option<Vec<Expectation>>;

    /// Every invocation recorded against the double, in the order received.
    fn received_calls(&self) -> Vec<Invocation>;
}

/// A minimal double that records its own invocation history.
///
/// This is the reference collaborator for the verification engine: configure
/// expected calls with [`expect_call`](RecordingDouble::expect_call), hand the
/// double to the system under test, which reports its calls through
/// [`record`](RecordingDouble::record), then verify.
///
/// State lives behind a `Mutex` so the system under test may call the double
/// from other threads; everything recorded before verification begins is
/// visible to it.
#[derive(Default)]
pub struct RecordingDouble {
    state: Mutex<DoubleState>,
}

#[derive(Default)]
struct DoubleState {
    configured: Vec<Expectation>,
    received: Vec<Invocation>,
}

impl RecordingDouble {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure an expected call: one matcher per declared parameter, in
    /// declaration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use doublecheck::matchers::eq;
    /// use doublecheck::{MethodSig, Param, RecordingDouble};
    ///
    /// let double = RecordingDouble::new();
    /// double.expect_call(
    ///     MethodSig::new("Add", vec![Param::new("i32", "a"), Param::new("i32", "b")]),
    ///     vec![eq(1), eq(2)],
    /// );
    /// ```
    pub fn expect_call(&self, method: MethodSig, matchers: Vec<Arc<dyn ArgMatcher>>) -> &Self {
        self.lock().configured.push(Expectation::new(method, matchers));
        self
    }

    /// Record an invocation made by the system under test.
    pub fn record(&self, method: MethodSig, args: Vec<Value>) {
        self.lock().received.push(Invocation::new(method, args));
    }

    fn lock(&self) -> MutexGuard<'_, DoubleState> {
        // A recorder thread that panicked mid-call must not wedge verification.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Introspect for RecordingDouble {
    fn configured_calls(&self) -> Option<Vec<Expectation>> {
        Some(self.lock().configured.clone())
    }

    fn received_calls(&self) -> Vec<Invocation> {
        self.lock().received.clone()
    }
}

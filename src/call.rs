//! Core data model: method identities, configured expectations, observed
//! invocations, and the outcome of one verification pass.

use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::matchers::ArgMatcher;

/// A declared method parameter: type and name, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub type_name: String,
    pub name: String,
}

impl Param {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// Method identity: the method name plus its parameter-type signature.
///
/// Equality and hashing use the name and parameter *types* only, so overloads
/// are distinguished while parameter display-names never affect identity.
/// Renders as `Name(Type name, ...)`, the form used in failure reports.
///
/// # Example
///
/// ```rust
/// use doublecheck::{MethodSig, Param};
///
/// let add = MethodSig::new("Add", vec![Param::new("i32", "a"), Param::new("i32", "b")]);
/// assert_eq!(add.to_string(), "Add(i32 a, i32 b)");
/// ```
#[derive(Debug, Clone)]
pub struct MethodSig {
    name: String,
    params: Vec<Param>,
}

impl MethodSig {
    pub fn new(name: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameters, in declaration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl PartialEq for MethodSig {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(a, b)| a.type_name == b.type_name)
    }
}

impl Eq for MethodSig {}

impl Hash for MethodSig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        for param in &self.params {
            param.type_name.hash(state);
        }
    }
}

impl fmt::Display for MethodSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect();
        write!(f, "{}({})", self.name, params.join(", "))
    }
}

/// One configured call: a method identity plus one argument matcher per
/// declared parameter, in declaration order.
///
/// Immutable once extracted from a double; discarded when the verification
/// call returns.
#[derive(Clone)]
pub struct Expectation {
    method: MethodSig,
    matchers: Vec<Arc<dyn ArgMatcher>>,
}

impl Expectation {
    pub fn new(method: MethodSig, matchers: Vec<Arc<dyn ArgMatcher>>) -> Self {
        Self { method, matchers }
    }

    pub fn method(&self) -> &MethodSig {
        &self.method
    }

    /// Positional argument matchers, one per declared parameter.
    pub fn matchers(&self) -> &[Arc<dyn ArgMatcher>] {
        &self.matchers
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matchers are opaque; the signature is the useful part.
        f.debug_tuple("Expectation")
            .field(&self.method.to_string())
            .finish()
    }
}

/// One observed call: a method identity plus the concrete argument values the
/// system under test passed, in call order. Produced and owned by the double;
/// verification only reads snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    method: MethodSig,
    args: Vec<Value>,
}

impl Invocation {
    pub fn new(method: MethodSig, args: Vec<Value>) -> Self {
        Self { method, args }
    }

    pub fn method(&self) -> &MethodSig {
        &self.method
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

/// The transient result of a single verification pass.
///
/// All three collections keep discovery order (expectations in configuration
/// order, invocations in call order) so rendered reports are reproducible
/// across runs.
#[derive(Debug, Clone, Default)]
pub struct VerificationOutcome {
    /// Expectations never exercised (or exercised the wrong number of times
    /// in exact-count mode).
    pub missed: Vec<Expectation>,
    /// Observed invocations that fall outside the configured set.
    pub unmatched: Vec<Invocation>,
    /// Expectations that were exercised as configured.
    pub satisfied: Vec<Expectation>,
}

impl VerificationOutcome {
    /// The double was used exactly as configured.
    pub fn passed(&self) -> bool {
        self.missed.is_empty() && self.unmatched.is_empty()
    }
}

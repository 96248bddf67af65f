//! Argument matchers: the opaque predicate capability consumed during
//! verification, plus a small stock of ready-made matchers.
//!
//! The verification pipeline only ever asks a matcher one question,
//! [`ArgMatcher::satisfied_by`]; it never inspects matcher internals. Any type
//! implementing the trait is usable, from the stock matchers here to whatever
//! a mock framework's own matcher subsystem supplies through the
//! [`Introspect`](crate::double::Introspect) seam.

use glob::Pattern;
use regex::Regex;
use serde_json::Value;
use std::sync::Arc;

/// A per-argument predicate deciding whether a concrete value satisfies one
/// configured expectation slot.
pub trait ArgMatcher: Send + Sync {
    /// Whether the concrete argument value satisfies this matcher.
    fn satisfied_by(&self, value: &Value) -> bool;
}

struct EqMatcher(Value);

impl ArgMatcher for EqMatcher {
    fn satisfied_by(&self, value: &Value) -> bool {
        *value == self.0
    }
}

struct AnyMatcher;

impl ArgMatcher for AnyMatcher {
    fn satisfied_by(&self, _value: &Value) -> bool {
        true
    }
}

struct PatternMatcher {
    raw: String,
}

impl ArgMatcher for PatternMatcher {
    fn satisfied_by(&self, value: &Value) -> bool {
        let actual = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        // Try glob pattern first
        if let Ok(glob) = Pattern::new(&self.raw) {
            if glob.matches(&actual) {
                return true;
            }
        }

        // Try regex
        if let Ok(re) = Regex::new(&self.raw) {
            if re.is_match(&actual) {
                return true;
            }
        }

        // Exact match fallback
        actual == self.raw
    }
}

struct PredicateMatcher<F>(F);

impl<F> ArgMatcher for PredicateMatcher<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn satisfied_by(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

/// Match by exact JSON-value equality.
///
/// # Example
///
/// ```rust
/// use doublecheck::matchers::{eq, ArgMatcher};
/// use serde_json::json;
///
/// assert!(eq(42).satisfied_by(&json!(42)));
/// assert!(!eq(42).satisfied_by(&json!(43)));
/// ```
pub fn eq(expected: impl Into<Value>) -> Arc<dyn ArgMatcher> {
    Arc::new(EqMatcher(expected.into()))
}

/// Wildcard matcher, satisfied by every value.
pub fn any() -> Arc<dyn ArgMatcher> {
    Arc::new(AnyMatcher)
}

/// Match a string-rendered argument against a pattern.
///
/// Three matching modes are tried in order:
/// 1. **Glob**: e.g., `*.txt`, `**/config.json`
/// 2. **Regex**: e.g., `^npm (install|i)$`
/// 3. **Exact**: literal string comparison
///
/// Non-string values are compared through their JSON rendering.
///
/// # Example
///
/// ```rust
/// use doublecheck::matchers::{pattern, ArgMatcher};
/// use serde_json::json;
///
/// assert!(pattern("*.env").satisfied_by(&json!("local.env")));
/// assert!(!pattern("*.env").satisfied_by(&json!("local.txt")));
/// ```
pub fn pattern(pat: impl Into<String>) -> Arc<dyn ArgMatcher> {
    Arc::new(PatternMatcher { raw: pat.into() })
}

/// Wrap an arbitrary predicate as a matcher.
///
/// # Example
///
/// ```rust
/// use doublecheck::matchers::{predicate, ArgMatcher};
/// use serde_json::json;
///
/// let positive = predicate(|v| v.as_i64().is_some_and(|n| n > 0));
/// assert!(positive.satisfied_by(&json!(7)));
/// assert!(!positive.satisfied_by(&json!(-7)));
/// ```
pub fn predicate<F>(f: F) -> Arc<dyn ArgMatcher>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(PredicateMatcher(f))
}

/// Build a matcher list without spelling out the trait-object type.
///
/// # Example
///
/// ```rust,ignore
/// use doublecheck::matchers::{any, eq};
/// use doublecheck::matchers;
///
/// let args = matchers![eq(1), any()];
/// ```
#[macro_export]
macro_rules! matchers {
    ($($m:expr),* $(,)?) => {{
        let list: Vec<std::sync::Arc<dyn $crate::matchers::ArgMatcher>> = vec![$($m),*];
        list
    }};
}

//! Expectation extraction: normalizes a double's configured-call store into
//! `Expectation` records for one verification pass.

use super::VerifyError;
use crate::call::Expectation;
use crate::double::Introspect;

/// Read the configured-call set from the double, in configuration order.
///
/// `None` from the introspection seam means the object is not a recognizable
/// double at all, a setup defect rather than a verification failure. An empty
/// configuration store is returned as-is; the verifier decides what an empty
/// set means.
pub(super) fn snapshot_expectations(
    double: &dyn Introspect,
) -> Result<Vec<Expectation>, VerifyError> {
    double
        .configured_calls()
        .ok_or(VerifyError::ConfigurationNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::Invocation;

    /// An adapter whose configuration-store lookup failed.
    struct NotADouble;

    impl Introspect for NotADouble {
        fn configured_calls(&self) -> Option<Vec<Expectation>> {
            None
        }

        fn received_calls(&self) -> Vec<Invocation> {
            Vec::new()
        }
    }

    #[test]
    fn test_missing_configuration_store_is_a_setup_defect() {
        let result = snapshot_expectations(&NotADouble);
        assert!(matches!(result, Err(VerifyError::ConfigurationNotFound)));
    }

    #[test]
    fn test_empty_configuration_extracts_successfully() {
        let double = crate::double::RecordingDouble::new();
        let expectations = snapshot_expectations(&double).unwrap();
        assert!(expectations.is_empty());
    }
}

//! Failure-report rendering.

use crate::call::{Expectation, Invocation};

const MISSED_HEADER: &str = "The following calls were configured, but not received";
const UNMATCHED_HEADER: &str = "The following calls were received, but not configured";

/// Render the consolidated failure report: one labeled section per non-empty
/// set, blank-line separated. Lines carry the declared method signature, not
/// argument values, since the signature is what identifies the offending
/// method or overload.
///
/// Ordering follows the discovery order of the sets, so a fixed outcome always
/// renders byte-identically.
pub(super) fn render(missed: &[Expectation], unmatched: &[Invocation]) -> String {
    let mut sections = Vec::new();

    if !missed.is_empty() {
        sections.push(section(
            MISSED_HEADER,
            missed.iter().map(|e| e.method().to_string()),
        ));
    }

    if !unmatched.is_empty() {
        sections.push(section(
            UNMATCHED_HEADER,
            unmatched.iter().map(|i| i.method().to_string()),
        ));
    }

    sections.join("\n\n")
}

fn section(header: &str, signatures: impl Iterator<Item = String>) -> String {
    let mut lines = vec![header.to_string()];
    lines.extend(signatures.map(|sig| format!("  {sig}")));
    lines.join("\n")
}

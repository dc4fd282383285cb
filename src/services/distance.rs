//! Organizational distance from manager chains.

use std::collections::BTreeSet;

use crate::models::{DirectoryIndex, Person};

/// Organizational distance between two people.
///
/// Returns 0 when either person appears in the other's manager chain (a
/// direct or indirect reporting relationship — too close, must be excluded
/// from matching). Otherwise returns the size of the symmetric difference
/// of the two ancestor-email sets: a dissimilarity count where higher means
/// more organizationally distant, which is desired for cross-team pairing.
///
/// Emails are compared case-insensitively. People without directory records
/// have empty chains, giving distance 0.
#[must_use]
pub fn manager_distance(a: &Person, b: &Person, index: &DirectoryIndex) -> usize {
    let a_chain: Vec<String> = a
        .managers(index)
        .iter()
        .map(|r| r.email.to_lowercase())
        .collect();
    let b_chain: Vec<String> = b
        .managers(index)
        .iter()
        .map(|r| r.email.to_lowercase())
        .collect();

    let a_email = a.email().to_lowercase();
    let b_email = b.email().to_lowercase();
    if a_chain.contains(&b_email) || b_chain.contains(&a_email) {
        return 0;
    }

    let a_set: BTreeSet<&String> = a_chain.iter().collect();
    let b_set: BTreeSet<&String> = b_chain.iter().collect();
    a_set.symmetric_difference(&b_set).count()
}

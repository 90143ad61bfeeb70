//! Batch assembly.
//!
//! The batch builder is the single place batch-wide rules live: positional
//! error aggregation and delete deduplication. It only inspects and copies
//! the mutations it is given.

use std::collections::HashSet;
use stratum_wire::WireMutation;

use crate::error::{MutationError, MutationErrors};
use crate::mutation::Mutation;

/// Build the ordered sequence of wire mutation messages for a batch.
///
/// If any mutation carries a deferred error, the whole batch fails with a
/// positional aggregate (one slot per input mutation, `None` for valid
/// slots) and no wire output is produced. Otherwise mutations are emitted
/// in input order. Duplicate deletes of the same key collapse to the first
/// occurrence; non-delete mutations always emit, even when another mutation
/// in the batch targets the same key.
pub fn build_batch(mutations: &[Mutation]) -> Result<Vec<WireMutation>, MutationErrors> {
    let errors: Vec<Option<MutationError>> =
        mutations.iter().map(|m| m.error().cloned()).collect();
    if errors.iter().any(Option::is_some) {
        return Err(MutationErrors(errors));
    }

    // Collapse duplicate deletions only; deletes are idempotent, while
    // collapsing writes could discard distinct intended values.
    let mut seen_deletes: HashSet<String> = HashSet::new();
    let mut wire = Vec::with_capacity(mutations.len());
    for mutation in mutations {
        if mutation.is_delete() {
            if let Some(key) = mutation.key() {
                if !seen_deletes.insert(key.canonical_string()) {
                    continue;
                }
            }
        }
        if let Some(message) = mutation.to_wire() {
            wire.push(message);
        }
    }
    Ok(wire)
}

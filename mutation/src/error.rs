//! Mutation error types.

use std::fmt;
use stratum_core::{EncodeError, Key};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while constructing or decorating a mutation.
///
/// Construction and decoration failures are not raised at the call site;
/// they are carried on the mutation itself and surfaced positionally when
/// the batch is built. `Clone` so the batch builder can aggregate them
/// without consuming the mutations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MutationError {
    #[error("Invalid key: {key}")]
    InvalidKey { key: String },

    #[error("Cannot target an incomplete key: {key}")]
    IncompleteKey { key: String },

    #[error("Operation on an uninitialized mutation")]
    UninitializedMutation,

    #[error("Attached an uninitialized property transform")]
    UninitializedTransform,

    #[error("Property transforms cannot be applied to a delete mutation")]
    TransformOnDelete,

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl MutationError {
    pub fn invalid_key(key: &Key) -> Self {
        Self::InvalidKey {
            key: key.canonical_string(),
        }
    }

    pub fn incomplete_key(key: &Key) -> Self {
        Self::IncompleteKey {
            key: key.canonical_string(),
        }
    }
}

/// Positional aggregate of batch validation failures.
///
/// One slot per input mutation, in input order: `None` for mutations that
/// validated, the specific error for those that did not. Callers map each
/// failure back to the exact mutation that caused it by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationErrors(pub Vec<Option<MutationError>>);

impl MutationErrors {
    /// Number of slots, equal to the input batch length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the aggregate has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed slots.
    pub fn failure_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// The error recorded at an input index, if any.
    pub fn get(&self, index: usize) -> Option<&MutationError> {
        self.0.get(index).and_then(Option::as_ref)
    }

    /// Iterate failed slots as (index, error) pairs, in input order.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &MutationError)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, error)| error.as_ref().map(|e| (index, e)))
    }
}

impl fmt::Display for MutationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} mutations failed", self.failure_count(), self.len())?;
        for (index, error) in self.failures() {
            write!(f, "; [{}] {}", index, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for MutationErrors {}

//! Stratum Mutation
//!
//! Build wire-ready mutation messages (INSERT/UPDATE/UPSERT/DELETE).
//!
//! Responsibilities:
//! - Construct mutations with key validation and entity encoding
//! - Attach ordered server-side property transforms
//! - Derive the property write-mask when transforms are present
//! - Assemble batches: positional error aggregation and delete dedup
//!
//! # Module Structure
//!
//! - `mutation` - The Mutation value type, constructors, and decoration
//! - `transform` - PropertyTransform builders
//! - `batch` - Batch assembly (validation, dedup, wire emission)
//! - `error` - Error types for mutation construction failures

mod batch;
mod error;
mod mutation;
mod transform;

pub use batch::build_batch;
pub use error::{MutationError, MutationErrors, MutationResult};
pub use mutation::{Mutation, Operation};
pub use transform::PropertyTransform;

//! Stratum Tests
//!
//! Integration test suite for the mutation subsystem. Shared fixtures live
//! in `fixtures`; scenarios live under `tests/`.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use stratum_core::{props, Key, Properties, Value};
    pub use stratum_mutation::{
        build_batch, Mutation, MutationError, MutationErrors, Operation, PropertyTransform,
    };
    pub use stratum_wire::{WireMutation, WireOperation};
}

//! Stratum Core Types
//!
//! This crate provides the foundational types used throughout the Stratum client:
//! - Key types (Key, KeyId) identifying entities in the remote store
//! - Value types (the Value enum with all storable scalar and composite types)
//! - Property storage (Properties, the `props!` macro)
//! - The entity-encoder seam (ToProperties, EncodeError)

mod encode;
mod key;
mod value;

pub use encode::*;
pub use key::*;
pub use value::*;

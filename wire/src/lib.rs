//! Stratum Wire Messages
//!
//! Serializable mutation messages consumed by the RPC transport.
//!
//! Responsibilities:
//! - Define the wire shape of mutations, entities, keys, and values
//! - Convert core types into wire messages (one-way, core to wire)
//! - Keep serialization concerns out of the validation layer

mod convert;
mod message;

pub use convert::entity_from_properties;
pub use message::*;

//! Wire message types.
//!
//! These mirror the remote service's mutation schema as owned Rust types.
//! They are produced by the mutation builder and consumed by the transport;
//! nothing in the validation layer depends on their shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier carried by a wire path element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireId {
    Numeric(i64),
    Named(String),
}

/// One element of a wire key path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePathElement {
    /// Entity kind.
    pub kind: String,
    /// Identifier, absent for incomplete keys.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<WireId>,
}

/// A full key on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireKey {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub namespace: Option<String>,
    /// Path from root ancestor to leaf.
    pub path: Vec<WirePathElement>,
}

/// A property value on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireValue {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    /// Milliseconds since Unix epoch.
    Timestamp(i64),
    Blob(Vec<u8>),
    Key(WireKey),
    Array(Vec<WireValue>),
}

/// An entity payload: key plus named properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEntity {
    pub key: WireKey,
    pub properties: BTreeMap<String, WireValue>,
}

/// The operation carried by a wire mutation. Exactly one variant per
/// mutation; deletes carry a key only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireOperation {
    Insert(WireEntity),
    Update(WireEntity),
    Upsert(WireEntity),
    Delete(WireKey),
}

/// Explicit set of property paths written from client-supplied data.
///
/// Absence of a mask on the mutation means "write all properties in the
/// payload". An empty mask means "write nothing from the client".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMask {
    pub paths: Vec<String>,
}

/// Transform operation kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    /// Set the property to the server's commit time.
    SetToServerTime,
    /// Add the operand to the server-held numeric value.
    Increment(WireValue),
    /// Keep the larger of the operand and the server-held value.
    Maximum(WireValue),
    /// Keep the smaller of the operand and the server-held value.
    Minimum(WireValue),
    /// Append operands not already present in the server-held array.
    AppendMissingElements(Vec<WireValue>),
    /// Remove all occurrences of the operands from the server-held array.
    RemoveAllFromArray(Vec<WireValue>),
}

/// A server-side transform of one named property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformDescriptor {
    pub property: String,
    pub op: TransformOp,
}

/// One wire-ready mutation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMutation {
    pub operation: WireOperation,
    /// Present only when transforms were attached.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub property_mask: Option<PropertyMask>,
    /// Ordered transform descriptors, present only when transforms were
    /// attached.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub property_transforms: Vec<TransformDescriptor>,
}

//! The Mutation value type, constructors, and decoration.
//!
//! A mutation captures one requested change to one entity: the target key,
//! the operation variant, any attached property transforms, and the derived
//! property mask. Construction and decoration failures are deferred: the
//! mutation carries its first error until the batch builder consumes it, so
//! chained calls after a failure are safe no-ops.

use stratum_core::{Key, Properties, ToProperties};
use stratum_wire::{
    entity_from_properties, PropertyMask, WireKey, WireMutation, WireOperation,
};

use crate::error::MutationError;
use crate::transform::PropertyTransform;

/// The operation variant carried by a mutation. Exactly one per mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create the entity; applying fails if the key already exists.
    Insert(Properties),
    /// Replace the entity; applying fails if the key does not exist.
    Update(Properties),
    /// Create or replace the entity unconditionally.
    Upsert(Properties),
    /// Delete the entity; carries no property payload.
    Delete,
}

impl Operation {
    /// Returns true for the Delete variant.
    pub fn is_delete(&self) -> bool {
        matches!(self, Operation::Delete)
    }

    /// The client-written property payload, if the operation carries one.
    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Operation::Insert(p) | Operation::Update(p) | Operation::Upsert(p) => Some(p),
            Operation::Delete => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Parts {
    key: Key,
    operation: Operation,
    transforms: Vec<PropertyTransform>,
    property_mask: Option<Vec<String>>,
}

/// A single requested change to one entity.
///
/// Either in the valid state (operation present) or the error state (first
/// construction/decoration error, no operation); the two cannot coexist.
/// Once in the error state, every later decoration preserves the first
/// error.
#[derive(Debug, Clone)]
pub struct Mutation {
    state: Result<Parts, MutationError>,
}

impl Mutation {
    /// Create a mutation that saves `src` under `key`. Applying it fails
    /// with an "already exists" condition if an entity with that key is
    /// already stored; existence is never checked at construction.
    pub fn insert<S: ToProperties>(key: &Key, src: &S) -> Self {
        Self::write_op(key, src, Operation::Insert)
    }

    /// Create a mutation that saves `src` under `key`, whether or not the
    /// key already exists.
    pub fn upsert<S: ToProperties>(key: &Key, src: &S) -> Self {
        Self::write_op(key, src, Operation::Upsert)
    }

    /// Create a mutation that replaces the entity stored under `key`.
    /// Applying it fails with a "not found" condition if the key does not
    /// exist.
    pub fn update<S: ToProperties>(key: &Key, src: &S) -> Self {
        if !key.is_valid() {
            return Self::failed(MutationError::invalid_key(key));
        }
        if key.is_incomplete() {
            return Self::failed(MutationError::incomplete_key(key));
        }
        Self::write_op(key, src, Operation::Update)
    }

    /// Create a mutation that deletes the entity stored under `key`.
    pub fn delete(key: &Key) -> Self {
        if !key.is_valid() {
            return Self::failed(MutationError::invalid_key(key));
        }
        if key.is_incomplete() {
            return Self::failed(MutationError::incomplete_key(key));
        }
        Self::ready(key, Operation::Delete)
    }

    /// Attach one or more server-side property transforms.
    ///
    /// Can be called multiple times; transform order is preserved, first by
    /// call order and then by argument order within one call. Fails (and
    /// stays failed) on delete mutations and on transforms that did not
    /// build. After a successful append the property mask is recomputed
    /// from the mutation's own payload.
    pub fn with_transforms(
        self,
        transforms: impl IntoIterator<Item = PropertyTransform>,
    ) -> Self {
        let mut parts = match self.state {
            Ok(parts) => parts,
            Err(error) => return Self::failed(error),
        };
        if parts.operation.is_delete() {
            return Self::failed(MutationError::TransformOnDelete);
        }
        for transform in transforms {
            if !transform.is_valid() {
                return Self::failed(MutationError::UninitializedTransform);
            }
            parts.transforms.push(transform);
        }
        parts.property_mask = derive_property_mask(&parts.operation, &parts.transforms);
        Self { state: Ok(parts) }
    }

    /// The deferred construction/decoration error, if any.
    pub fn error(&self) -> Option<&MutationError> {
        self.state.as_ref().err()
    }

    /// The target key, absent in the error state.
    pub fn key(&self) -> Option<&Key> {
        self.state.as_ref().ok().map(|parts| &parts.key)
    }

    /// The operation variant, absent in the error state.
    pub fn operation(&self) -> Option<&Operation> {
        self.state.as_ref().ok().map(|parts| &parts.operation)
    }

    /// Returns true if this is a delete mutation.
    pub fn is_delete(&self) -> bool {
        self.operation().is_some_and(Operation::is_delete)
    }

    /// The attached transforms, in attachment order.
    pub fn transforms(&self) -> &[PropertyTransform] {
        match &self.state {
            Ok(parts) => &parts.transforms,
            Err(_) => &[],
        }
    }

    /// The derived property mask: the property paths written from the
    /// client payload. Present only when transforms are attached.
    pub fn property_mask(&self) -> Option<&[String]> {
        self.state
            .as_ref()
            .ok()
            .and_then(|parts| parts.property_mask.as_deref())
    }

    pub(crate) fn to_wire(&self) -> Option<WireMutation> {
        let parts = self.state.as_ref().ok()?;
        let operation = match &parts.operation {
            Operation::Insert(p) => WireOperation::Insert(entity_from_properties(&parts.key, p)),
            Operation::Update(p) => WireOperation::Update(entity_from_properties(&parts.key, p)),
            Operation::Upsert(p) => WireOperation::Upsert(entity_from_properties(&parts.key, p)),
            Operation::Delete => WireOperation::Delete(WireKey::from(&parts.key)),
        };
        Some(WireMutation {
            operation,
            property_mask: parts
                .property_mask
                .clone()
                .map(|paths| PropertyMask { paths }),
            property_transforms: parts
                .transforms
                .iter()
                .filter_map(|t| t.descriptor().cloned())
                .collect(),
        })
    }

    fn write_op<S: ToProperties>(key: &Key, src: &S, make: fn(Properties) -> Operation) -> Self {
        if !key.is_valid() {
            return Self::failed(MutationError::invalid_key(key));
        }
        match src.to_properties(key) {
            Ok(properties) => Self::ready(key, make(properties)),
            Err(error) => Self::failed(error.into()),
        }
    }

    fn ready(key: &Key, operation: Operation) -> Self {
        Self {
            state: Ok(Parts {
                key: key.clone(),
                operation,
                transforms: Vec::new(),
                property_mask: None,
            }),
        }
    }

    fn failed(error: MutationError) -> Self {
        Self { state: Err(error) }
    }
}

impl Default for Mutation {
    /// The uninitialized state. Decorating or batching a defaulted
    /// mutation surfaces `UninitializedMutation`.
    fn default() -> Self {
        Self::failed(MutationError::UninitializedMutation)
    }
}

/// Derived write-mask: exactly the property names in the mutation's own
/// payload, present exactly when transforms are attached.
///
/// With no transforms there is no mask, which on the wire means "write all
/// properties in the payload". With transforms, the mask pins the written
/// set to the client-supplied names, so a property that is only transformed
/// keeps its server-held value as the transform input; an empty payload
/// yields an empty mask, so the server applies transforms without any
/// client write at all.
fn derive_property_mask(
    operation: &Operation,
    transforms: &[PropertyTransform],
) -> Option<Vec<String>> {
    if transforms.is_empty() {
        return None;
    }
    Some(
        operation
            .properties()
            .map(|props| props.keys().cloned().collect())
            .unwrap_or_default(),
    )
}

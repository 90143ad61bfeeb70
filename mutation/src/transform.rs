//! Property transform builders.
//!
//! A transform describes one server-side operation on a named property,
//! applied as part of a mutation without the client supplying the resulting
//! value. Transforms are immutable once built. A transform built from bad
//! input (empty property name, non-numeric operand where a numeric one is
//! required) carries no descriptor; attaching it to a mutation fails
//! rather than silently dropping it.

use stratum_core::Value;
use stratum_wire::{TransformDescriptor, TransformOp, WireValue};

/// A single server-side property transform.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTransform {
    descriptor: Option<TransformDescriptor>,
}

impl PropertyTransform {
    /// Set the property to the server's commit time.
    pub fn set_to_server_time(property: impl Into<String>) -> Self {
        Self::build(property.into(), TransformOp::SetToServerTime)
    }

    /// Add `amount` to the server-held value. `amount` must be Int or Float.
    pub fn increment(property: impl Into<String>, amount: Value) -> Self {
        Self::numeric(property.into(), amount, TransformOp::Increment)
    }

    /// Keep the larger of `value` and the server-held value. Numeric only.
    pub fn maximum(property: impl Into<String>, value: Value) -> Self {
        Self::numeric(property.into(), value, TransformOp::Maximum)
    }

    /// Keep the smaller of `value` and the server-held value. Numeric only.
    pub fn minimum(property: impl Into<String>, value: Value) -> Self {
        Self::numeric(property.into(), value, TransformOp::Minimum)
    }

    /// Append `values` that are missing from the server-held array.
    pub fn append_missing_elements(property: impl Into<String>, values: Vec<Value>) -> Self {
        Self::build(
            property.into(),
            TransformOp::AppendMissingElements(wire_values(&values)),
        )
    }

    /// Remove all occurrences of `values` from the server-held array.
    pub fn remove_all_from_array(property: impl Into<String>, values: Vec<Value>) -> Self {
        Self::build(
            property.into(),
            TransformOp::RemoveAllFromArray(wire_values(&values)),
        )
    }

    /// Returns true if the transform was built from well-formed input.
    pub fn is_valid(&self) -> bool {
        self.descriptor.is_some()
    }

    /// The target property name, if the transform is valid.
    pub fn property(&self) -> Option<&str> {
        self.descriptor.as_ref().map(|d| d.property.as_str())
    }

    pub(crate) fn descriptor(&self) -> Option<&TransformDescriptor> {
        self.descriptor.as_ref()
    }

    fn build(property: String, op: TransformOp) -> Self {
        if property.is_empty() {
            return Self { descriptor: None };
        }
        Self {
            descriptor: Some(TransformDescriptor { property, op }),
        }
    }

    fn numeric(property: String, operand: Value, op: impl FnOnce(WireValue) -> TransformOp) -> Self {
        if !operand.is_numeric() {
            return Self { descriptor: None };
        }
        Self::build(property, op(WireValue::from(&operand)))
    }
}

fn wire_values(values: &[Value]) -> Vec<WireValue> {
    values.iter().map(WireValue::from).collect()
}

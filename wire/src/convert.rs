//! Conversions from core types into wire messages.

use crate::{WireEntity, WireId, WireKey, WirePathElement, WireValue};
use stratum_core::{Key, KeyId, Properties, Value};

impl From<&Key> for WireKey {
    fn from(key: &Key) -> Self {
        let mut path = Vec::new();
        collect_path(key, &mut path);
        WireKey {
            namespace: key.namespace().map(str::to_owned),
            path,
        }
    }
}

fn collect_path(key: &Key, path: &mut Vec<WirePathElement>) {
    if let Some(parent) = key.parent() {
        collect_path(parent, path);
    }
    path.push(WirePathElement {
        kind: key.kind().to_owned(),
        id: key.id().map(|id| match id {
            KeyId::Numeric(n) => WireId::Numeric(*n),
            KeyId::Named(name) => WireId::Named(name.clone()),
        }),
    });
}

impl From<&Value> for WireValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => WireValue::Null,
            Value::Bool(b) => WireValue::Bool(*b),
            Value::Int(i) => WireValue::Integer(*i),
            Value::Float(f) => WireValue::Double(*f),
            Value::Text(s) => WireValue::Text(s.clone()),
            Value::Timestamp(t) => WireValue::Timestamp(*t),
            Value::Blob(b) => WireValue::Blob(b.clone()),
            Value::KeyRef(k) => WireValue::Key(k.into()),
            Value::List(items) => WireValue::Array(items.iter().map(WireValue::from).collect()),
        }
    }
}

/// Convert a property map and its key into a wire entity.
pub fn entity_from_properties(key: &Key, properties: &Properties) -> WireEntity {
    WireEntity {
        key: key.into(),
        properties: properties
            .iter()
            .map(|(name, value)| (name.clone(), WireValue::from(value)))
            .collect(),
    }
}

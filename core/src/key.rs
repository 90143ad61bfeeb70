//! Key types for Stratum entities.
//!
//! A key identifies one entity in the remote store. Keys are hierarchical:
//! each key carries a kind, an optional identifier (numeric or named), an
//! optional namespace, and an optional parent key. Keys are plain owned
//! values, cheap to clone, and never mutated after construction.

use std::fmt;

/// The identifying component of a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyId {
    /// Server- or caller-assigned numeric identifier.
    Numeric(i64),
    /// Caller-assigned name.
    Named(String),
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyId::Numeric(id) => write!(f, "{}", id),
            KeyId::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A key identifying an entity in the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    kind: String,
    id: Option<KeyId>,
    namespace: Option<String>,
    parent: Option<Box<Key>>,
}

impl Key {
    /// Create an incomplete key of the given kind. The server assigns the
    /// identifier when an entity is first written under it.
    pub fn incomplete(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            namespace: None,
            parent: None,
        }
    }

    /// Create a complete key with a caller-assigned name.
    pub fn named(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: Some(KeyId::Named(name.into())),
            namespace: None,
            parent: None,
        }
    }

    /// Create a complete key with a numeric identifier.
    pub fn numeric(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id: Some(KeyId::Numeric(id)),
            namespace: None,
            parent: None,
        }
    }

    /// Set the namespace. Every key in an ancestor chain must share one
    /// namespace for the chain to be valid.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the parent key. The parent must be complete for the child to be
    /// valid.
    pub fn with_parent(mut self, parent: Key) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// The entity kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The identifier, absent for incomplete keys.
    pub fn id(&self) -> Option<&KeyId> {
        self.id.as_ref()
    }

    /// The namespace, if one was set.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The parent key, if this key has an ancestor.
    pub fn parent(&self) -> Option<&Key> {
        self.parent.as_deref()
    }

    /// Returns true if the leaf element has no identifier yet.
    pub fn is_incomplete(&self) -> bool {
        self.id.is_none()
    }

    /// Returns true if the whole ancestor chain is well formed: every kind
    /// is non-empty, named identifiers are non-empty, every ancestor is
    /// complete, and the namespace is uniform across the chain.
    pub fn is_valid(&self) -> bool {
        let mut current = self;
        loop {
            if current.kind.is_empty() {
                return false;
            }
            if matches!(&current.id, Some(KeyId::Named(name)) if name.is_empty()) {
                return false;
            }
            match &current.parent {
                Some(parent) => {
                    if parent.is_incomplete() || parent.namespace != current.namespace {
                        return false;
                    }
                    current = parent;
                }
                None => return true,
            }
        }
    }

    /// Canonical textual form of the full key path, used for equality and
    /// for deduplicating deletes within a batch.
    pub fn canonical_string(&self) -> String {
        let mut out = String::new();
        if let Some(namespace) = &self.namespace {
            out.push_str(namespace);
            out.push(':');
        }
        self.write_path(&mut out);
        out
    }

    fn write_path(&self, out: &mut String) {
        if let Some(parent) = &self.parent {
            parent.write_path(out);
        }
        out.push('/');
        out.push_str(&self.kind);
        out.push(',');
        match &self.id {
            Some(id) => out.push_str(&id.to_string()),
            None => out.push_str("incomplete"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

//! Shared key and property fixtures for integration scenarios.

use stratum_core::{props, Key, Properties};

/// A complete key with a numeric identifier.
pub fn task_key(id: i64) -> Key {
    Key::numeric("Task", id)
}

/// A complete key with a caller-assigned name.
pub fn named_key(kind: &str, name: &str) -> Key {
    Key::named(kind, name)
}

/// An incomplete key (no identifier yet).
pub fn incomplete_key(kind: &str) -> Key {
    Key::incomplete(kind)
}

/// A structurally invalid key (empty kind).
pub fn invalid_key() -> Key {
    Key::numeric("", 1)
}

/// A small task payload.
pub fn task_props(title: &str, priority: i64) -> Properties {
    props! { "title" => title, "priority" => priority }
}

//! Entity encoding seam.
//!
//! Turning a caller value into a wire-ready property set is the job of an
//! entity encoder. Mutation constructors are generic over this seam, so
//! callers can plug in their own mapping (derived struct mappers, row
//! adapters) without this crate knowing about it. The one implementation
//! shipped here encodes a property map as itself after name validation.

use crate::{Key, Properties};
use std::sync::OnceLock;
use thiserror::Error;

/// Result type for entity encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while encoding a source value into properties.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EncodeError {
    #[error("Empty property name")]
    EmptyPropertyName,

    #[error("Reserved property name: {name}")]
    ReservedPropertyName { name: String },

    #[error("Invalid property path: {name}")]
    InvalidPropertyPath { name: String },
}

impl EncodeError {
    pub fn reserved_property_name(name: impl Into<String>) -> Self {
        Self::ReservedPropertyName { name: name.into() }
    }

    pub fn invalid_property_path(name: impl Into<String>) -> Self {
        Self::InvalidPropertyPath { name: name.into() }
    }
}

/// Convert a source value plus its target key into a property set.
pub trait ToProperties {
    fn to_properties(&self, key: &Key) -> EncodeResult<Properties>;
}

impl ToProperties for Properties {
    fn to_properties(&self, _key: &Key) -> EncodeResult<Properties> {
        for name in self.keys() {
            validate_property_name(name)?;
        }
        Ok(self.clone())
    }
}

/// Names matching `__...__` are reserved by the storage service.
fn reserved_name_pattern() -> &'static regex_lite::Regex {
    static PATTERN: OnceLock<regex_lite::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| regex_lite::Regex::new(r"^__.*__$").expect("static pattern compiles"))
}

/// Validate a property name: non-empty, no empty dotted path segments, and
/// no segment matching the reserved-name pattern.
pub fn validate_property_name(name: &str) -> EncodeResult<()> {
    if name.is_empty() {
        return Err(EncodeError::EmptyPropertyName);
    }
    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(EncodeError::invalid_property_path(name));
        }
        if reserved_name_pattern().is_match(segment) {
            return Err(EncodeError::reserved_property_name(segment));
        }
    }
    Ok(())
}

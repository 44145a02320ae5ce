//! # Submodel Element Classification
//!
//! Closed classification of submodel element kinds, derived from the
//! `modelType` tag. The reference walker branches on this enum instead
//! of free-form strings so the "which kinds carry references, which
//! kinds recurse" matrix stays exhaustive.

use serde_json::Value;

/// Kind of a submodel element, as far as reference checking cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Single reference in `value`.
    Reference,
    /// Two references, `first` and `second`.
    Relationship,
    /// Carries an external-only `globalAssetId`; never checked.
    Entity,
    /// Nested `value` array, recursed into.
    Collection,
    /// Nested `value` array, recursed into.
    List,
    /// Opaque leaf with no reference content at this layer.
    Other,
}

impl ElementKind {
    /// Classify an element by its `modelType` tag. Elements without a
    /// tag, or with an unrecognized one, are opaque.
    pub fn of(element: &Value) -> Self {
        match element.get("modelType").and_then(Value::as_str) {
            Some("ReferenceElement") => Self::Reference,
            Some("RelationshipElement") => Self::Relationship,
            Some("Entity") => Self::Entity,
            Some("SubmodelElementCollection") => Self::Collection,
            Some("SubmodelElementList") => Self::List,
            _ => Self::Other,
        }
    }

    /// Whether this kind nests further elements in its `value` array.
    pub fn recurses(self) -> bool {
        matches!(self, Self::Collection | Self::List)
    }
}

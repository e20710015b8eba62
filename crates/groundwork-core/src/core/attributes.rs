// crates/groundwork-core/src/core/attributes.rs
// ============================================================================
// Module: Groundwork Target Attributes
// Description: Structurally-typed attribute bag for resolved target components.
// Purpose: Give binder strategies read-only, checked access to target state.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A target attribute bag carries the resolved, already-provisioned
//! attributes of a bound target component: identifiers, resource handles,
//! and nested sub-configuration. The bag is owned by whichever subsystem
//! synthesized the target; strategies only read it. Required-attribute
//! lookups fail with an error naming the exact field, while optional
//! lookups return `None`; "feature not present" is never an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::identifiers::ComponentId;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Error raised when a strategy's minimum required target field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("target {target} is missing required attribute: {attribute}")]
pub struct MissingTargetAttributeError {
    /// Target component whose bag was inspected.
    pub target: ComponentId,
    /// The exact attribute name that was absent or mistyped.
    pub attribute: String,
}

// ============================================================================
// SECTION: Target Attributes
// ============================================================================

/// Read-only bag of a target component's resolved attributes.
///
/// # Invariants
/// - Strategies never mutate the bag; `with` exists for construction only.
/// - String-typed readers treat a present-but-mistyped value as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAttributes {
    /// Target component the attributes belong to.
    target: ComponentId,
    /// Attribute values keyed by field name.
    attributes: BTreeMap<String, Value>,
}

impl TargetAttributes {
    /// Creates an empty bag for the given target component.
    #[must_use]
    pub fn new(target: impl Into<ComponentId>) -> Self {
        Self {
            target: target.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the bag with an attribute added (construction only).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let _ = self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the target component identifier.
    #[must_use]
    pub const fn target(&self) -> &ComponentId {
        &self.target
    }

    /// Returns true when the attribute is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Returns the raw attribute value, if present.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns a string attribute, if present and string-typed.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Returns a boolean attribute, if present and boolean-typed.
    #[must_use]
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.attributes.get(key).and_then(Value::as_bool)
    }

    /// Returns an unsigned integer attribute, if present and numeric.
    #[must_use]
    pub fn integer(&self, key: &str) -> Option<u64> {
        self.attributes.get(key).and_then(Value::as_u64)
    }

    /// Returns a list of strings, if present and every element is a string.
    #[must_use]
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.attributes.get(key)?.as_array()?;
        items.iter().map(|item| item.as_str().map(ToString::to_string)).collect()
    }

    /// Returns a required string attribute.
    ///
    /// # Errors
    ///
    /// Returns [`MissingTargetAttributeError`] naming the field when it is
    /// absent or not string-typed.
    pub fn require_string(&self, key: &str) -> Result<&str, MissingTargetAttributeError> {
        self.string(key).ok_or_else(|| MissingTargetAttributeError {
            target: self.target.clone(),
            attribute: key.to_string(),
        })
    }

    /// Returns a required list-of-strings attribute.
    ///
    /// # Errors
    ///
    /// Returns [`MissingTargetAttributeError`] naming the field when it is
    /// absent or any element is not a string.
    pub fn require_string_list(
        &self,
        key: &str,
    ) -> Result<Vec<String>, MissingTargetAttributeError> {
        self.string_list(key).ok_or_else(|| MissingTargetAttributeError {
            target: self.target.clone(),
            attribute: key.to_string(),
        })
    }
}

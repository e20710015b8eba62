// crates/groundwork-config/src/resolver.rs
// ============================================================================
// Module: Configuration Resolution Engine
// Description: Layered default merging, normalization, and validation.
// Purpose: Turn a partial user manifest into a fully-resolved configuration.
// Dependencies: groundwork-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Resolution merges four layers, lowest precedence first: the hardcoded
//! fallback literal, schema-declared field defaults, the named profile
//! overlay, and the user-supplied partial config. A normalization pass then
//! fills every still-missing leaf of present nested objects from that
//! object's own schema defaults, so a user supplying one field of a
//! sub-object never leaves its siblings unset. The fully-normalized result
//! must pass schema validation; failures carry the complete violation list.
//! Resolution is idempotent: resolving an already-resolved document again
//! yields the same document.

// ============================================================================
// SECTION: Imports
// ============================================================================

use groundwork_core::HashDigest;
use groundwork_core::HashError;
use groundwork_core::hashing::DEFAULT_HASH_ALGORITHM;
use groundwork_core::hashing::hash_canonical_json;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::ComponentSchema;
use crate::merge::deep_merge;
use crate::validator::SchemaValidationError;
use crate::validator::validate;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when resolution produces an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The fully-merged, normalized result failed schema validation.
    #[error("resolved configuration failed validation: {0}")]
    Invalid(#[from] SchemaValidationError),
}

// ============================================================================
// SECTION: Resolved Configuration
// ============================================================================

/// Fully-defaulted, schema-valid configuration for one component instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    /// The resolved configuration document.
    value: Value,
}

impl ResolvedConfig {
    /// Wraps a validated document.
    pub(crate) const fn new(value: Value) -> Self {
        Self {
            value,
        }
    }

    /// Returns the resolved document.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.value
    }

    /// Returns the value at a JSON pointer, if present.
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.value.pointer(pointer)
    }

    /// Returns a copy usable as a layer-4 partial input.
    #[must_use]
    pub fn as_partial(&self) -> Value {
        self.value.clone()
    }

    /// Consumes the wrapper, returning the document.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns the canonical content digest of the document.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when canonicalization fails.
    pub fn digest(&self) -> Result<HashDigest, HashError> {
        hash_canonical_json(DEFAULT_HASH_ALGORITHM, &self.value)
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

impl ComponentSchema {
    /// Resolves a user partial config under the given profile key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] carrying the full violation list when
    /// the merged, normalized result fails schema validation.
    pub fn resolve(
        &self,
        user: &Value,
        profile_key: &str,
    ) -> Result<ResolvedConfig, ConfigurationError> {
        let mut merged = self.fallback().clone();
        deep_merge(&mut merged, &schema_defaults(self.schema()));
        deep_merge(&mut merged, self.profile_overlay(profile_key));
        deep_merge(&mut merged, user);
        normalize(&mut merged, self.schema());
        validate(&merged, self.schema())?;
        Ok(ResolvedConfig::new(merged))
    }
}

// ============================================================================
// SECTION: Schema Defaults Layer
// ============================================================================

/// Extracts the schema-declared field defaults as a partial document.
///
/// Each property contributes its declared `default` verbatim; array-typed
/// properties without one contribute an empty list. Properties with neither
/// stay absent and are filled later by normalization or higher layers.
fn schema_defaults(schema: &Value) -> Value {
    let mut defaults = serde_json::Map::new();
    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (key, property) in properties {
            if let Some(declared) = property.get("default") {
                let _ = defaults.insert(key.clone(), declared.clone());
            } else if property.get("type").and_then(Value::as_str) == Some("array") {
                let _ = defaults.insert(key.clone(), Value::Array(Vec::new()));
            }
        }
    }
    Value::Object(defaults)
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Fills still-missing leaves of present nested objects from their defaults.
///
/// Present values are never rewritten; mistyped values are left for the
/// validator to report.
fn normalize(config: &mut Value, schema: &Value) {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return;
    };
    let Some(entries) = config.as_object_mut() else {
        return;
    };
    for (key, property) in properties {
        match entries.get_mut(key) {
            Some(present) => normalize(present, property),
            None => {
                if let Some(declared) = property.get("default") {
                    let mut filled = declared.clone();
                    normalize(&mut filled, property);
                    let _ = entries.insert(key.clone(), filled);
                } else if property.get("type").and_then(Value::as_str) == Some("array") {
                    let _ = entries.insert(key.clone(), Value::Array(Vec::new()));
                }
            }
        }
    }
}

// crates/groundwork-core/src/core/descriptor.rs
// ============================================================================
// Module: Groundwork Binding Descriptor
// Description: Immutable record describing one source-to-target relationship.
// Purpose: Carry the capability, access modes, options, and seeded env entries.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A binding descriptor is produced once per declared relationship by the
//! manifest compiler and consumed exactly once by a binder strategy. It is
//! never mutated after construction; the builder-style `with_*` helpers
//! return amended copies during construction only.
//! Invariants:
//! - `capability` is non-empty and namespaced as `<service>:<resource-kind>`.
//! - `access` is a non-empty set drawn from the fixed vocabulary.
//! - Descriptors arriving via deserialization bypass [`BindingDescriptor::new`],
//!   so strategies re-validate the access set before any mutation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::access::AccessMode;
use crate::core::identifiers::CapabilityTag;
use crate::core::identifiers::ComponentId;

// ============================================================================
// SECTION: Option Keys
// ============================================================================

/// Option key requesting the full secure-access resolution pass.
pub const OPTION_REQUIRE_SECURE_ACCESS: &str = "require_secure_access";
/// Option key requesting secure network placement entries.
pub const OPTION_REQUIRE_SECURE_NETWORKING: &str = "require_secure_networking";
/// Option key requesting encryption-key grants and entries.
pub const OPTION_ENABLE_ENCRYPTION: &str = "enable_encryption";
/// Option key declaring a retention policy in days at the binding level.
pub const OPTION_RETENTION_DAYS: &str = "retention_days";

// ============================================================================
// SECTION: Descriptor Errors
// ============================================================================

/// Errors raised when a binding descriptor violates its shape contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingDescriptorError {
    /// The capability tag was empty.
    #[error("binding capability must not be empty")]
    EmptyCapability,
    /// The capability tag was not namespaced as `<service>:<resource-kind>`.
    #[error("binding capability must be namespaced as <service>:<resource-kind>: {capability}")]
    MalformedCapability {
        /// The offending capability tag.
        capability: String,
    },
    /// The access set was empty.
    #[error("binding access set must not be empty")]
    EmptyAccess,
    /// One or more access tags fell outside the fixed vocabulary.
    #[error("unknown access modes: {}", modes.join(", "))]
    UnknownAccessModes {
        /// Every offending access tag, in sorted order.
        modes: Vec<String>,
    },
}

// ============================================================================
// SECTION: Binding Descriptor
// ============================================================================

/// Immutable description of one requested source-to-target relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingDescriptor {
    /// Source component identifier.
    pub from: ComponentId,
    /// Target component identifier.
    pub to: ComponentId,
    /// Namespaced capability tag identifying the relationship kind.
    pub capability: CapabilityTag,
    /// Requested access-mode tags (order-irrelevant, vocabulary-bound).
    pub access: BTreeSet<String>,
    /// Free-form options read only by the matched strategy.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Value>,
    /// Pre-seeded environment entries merged in at lowest precedence.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl BindingDescriptor {
    /// Creates a descriptor, validating capability shape and access vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`BindingDescriptorError`] naming every offending value when
    /// the capability is empty or unnamespaced, or when the access set is
    /// empty or contains out-of-vocabulary tags.
    pub fn new(
        from: impl Into<ComponentId>,
        to: impl Into<ComponentId>,
        capability: impl Into<CapabilityTag>,
        access: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, BindingDescriptorError> {
        let capability = capability.into();
        if capability.as_str().is_empty() {
            return Err(BindingDescriptorError::EmptyCapability);
        }
        if !capability.is_namespaced() {
            return Err(BindingDescriptorError::MalformedCapability {
                capability: capability.as_str().to_string(),
            });
        }
        let access: BTreeSet<String> = access.into_iter().map(Into::into).collect();
        validate_access_tags(&access)?;
        Ok(Self {
            from: from.into(),
            to: to.into(),
            capability,
            access,
            options: BTreeMap::new(),
            env: BTreeMap::new(),
        })
    }

    /// Returns the descriptor with an option entry added.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let _ = self.options.insert(key.into(), value.into());
        self
    }

    /// Returns the descriptor with a pre-seeded environment entry added.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.env.insert(key.into(), value.into());
        self
    }

    /// Parses the raw access tags into vocabulary members.
    ///
    /// # Errors
    ///
    /// Returns [`BindingDescriptorError`] listing every out-of-vocabulary tag
    /// (deserialized descriptors bypass construction-time validation).
    pub fn access_modes(&self) -> Result<BTreeSet<AccessMode>, BindingDescriptorError> {
        validate_access_tags(&self.access)
    }

    /// Returns true when the descriptor requests the given access mode.
    #[must_use]
    pub fn requests(&self, mode: AccessMode) -> bool {
        self.access.contains(mode.as_str())
    }

    /// Returns true when the option is present and set to boolean `true`.
    #[must_use]
    pub fn option_flag(&self, key: &str) -> bool {
        matches!(self.options.get(key), Some(Value::Bool(true)))
    }

    /// Returns an option as an unsigned integer when present and numeric.
    #[must_use]
    pub fn option_u64(&self, key: &str) -> Option<u64> {
        self.options.get(key).and_then(Value::as_u64)
    }

    /// Returns true when any secure-access toggle is enabled.
    #[must_use]
    pub fn secure_mode_enabled(&self) -> bool {
        self.option_flag(OPTION_REQUIRE_SECURE_ACCESS)
            || self.option_flag(OPTION_REQUIRE_SECURE_NETWORKING)
            || self.option_flag(OPTION_ENABLE_ENCRYPTION)
    }
}

// ============================================================================
// SECTION: Access Validation
// ============================================================================

/// Validates raw access tags against the vocabulary, collecting all violations.
fn validate_access_tags(
    access: &BTreeSet<String>,
) -> Result<BTreeSet<AccessMode>, BindingDescriptorError> {
    if access.is_empty() {
        return Err(BindingDescriptorError::EmptyAccess);
    }
    let mut modes = BTreeSet::new();
    let mut unknown = Vec::new();
    for tag in access {
        match AccessMode::parse(tag) {
            Some(mode) => {
                let _ = modes.insert(mode);
            }
            None => unknown.push(tag.clone()),
        }
    }
    if !unknown.is_empty() {
        return Err(BindingDescriptorError::UnknownAccessModes {
            modes: unknown,
        });
    }
    Ok(modes)
}

// crates/groundwork-core/src/core/identifiers.rs
// ============================================================================
// Module: Groundwork Identifiers
// Description: Canonical opaque identifiers for components, services, and capabilities.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical string-based identifiers used throughout
//! Groundwork. Identifiers are opaque and serialize as strings. Shape
//! validation is handled at descriptor construction or registry boundaries
//! rather than within these simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Component instance identifier scoped to one synthesis pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a new component identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Target-service family identifier used as the binder registry key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceType(String);

impl ServiceType {
    /// Creates a new service-type identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ServiceType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ServiceType {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Capability Tags
// ============================================================================

/// Namespace separator inside capability tags.
const CAPABILITY_SEPARATOR: char = ':';

/// Namespaced relationship tag of the form `<service>:<resource-kind>`.
///
/// # Invariants
/// - A well-formed tag carries a non-empty service prefix and resource kind.
/// - Shape validation happens at descriptor construction; the wrapper itself
///   stays permissive so deserialized tags keep their manifest spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityTag(String);

impl CapabilityTag {
    /// Creates a new capability tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the service prefix when the tag is namespaced.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        self.split().map(|(service, _)| service)
    }

    /// Returns the resource kind when the tag is namespaced.
    #[must_use]
    pub fn resource_kind(&self) -> Option<&str> {
        self.split().map(|(_, kind)| kind)
    }

    /// Returns true when both namespace halves are present and non-empty.
    #[must_use]
    pub fn is_namespaced(&self) -> bool {
        self.split().is_some()
    }

    /// Splits the tag into service and resource kind halves.
    fn split(&self) -> Option<(&str, &str)> {
        let (service, kind) = self.0.split_once(CAPABILITY_SEPARATOR)?;
        if service.is_empty() || kind.is_empty() {
            return None;
        }
        Some((service, kind))
    }
}

impl fmt::Display for CapabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for CapabilityTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CapabilityTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

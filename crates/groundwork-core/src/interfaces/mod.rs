// crates/groundwork-core/src/interfaces/mod.rs
// ============================================================================
// Module: Groundwork Interfaces
// Description: Backend-agnostic interfaces for capability binding resolution.
// Purpose: Define the contract surface binder strategies implement.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Groundwork's binding layer integrates with the
//! surrounding provisioning system without embedding provider-specific
//! details. Implementations must be deterministic, synchronous, and fail
//! closed: a bind either applies its full emission set or leaves the source
//! component untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::attributes::MissingTargetAttributeError;
use crate::core::attributes::TargetAttributes;
use crate::core::component::SourceComponent;
use crate::core::descriptor::BindingDescriptor;
use crate::core::descriptor::BindingDescriptorError;
use crate::core::identifiers::CapabilityTag;
use crate::core::identifiers::ComponentId;

// ============================================================================
// SECTION: Bind Context
// ============================================================================

/// Context provided to binder strategies for one binding invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindContext {
    /// Source component identifier.
    pub source: ComponentId,
    /// Target component identifier.
    pub target: ComponentId,
    /// Optional prefix namespacing emitted environment keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_prefix: Option<String>,
}

impl BindContext {
    /// Creates a context without an environment prefix.
    #[must_use]
    pub fn new(source: impl Into<ComponentId>, target: impl Into<ComponentId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            env_prefix: None,
        }
    }

    /// Returns the context with an environment prefix set.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Returns an environment key under the configured prefix, if any.
    #[must_use]
    pub fn prefixed(&self, name: &str) -> String {
        match &self.env_prefix {
            Some(prefix) => format!("{prefix}_{name}"),
            None => name.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Binding Errors
// ============================================================================

/// Error raised when a descriptor names a capability outside a strategy's set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported capability {capability}; supported: {}", supported.join(", "))]
pub struct UnsupportedCapabilityError {
    /// The capability the descriptor requested.
    pub capability: CapabilityTag,
    /// The dispatched strategy's full supported set, in order.
    pub supported: Vec<String>,
}

/// Errors raised by a binder strategy invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The descriptor violated its shape contract.
    #[error(transparent)]
    Descriptor(#[from] BindingDescriptorError),
    /// A required target attribute was absent.
    #[error(transparent)]
    MissingTargetAttribute(#[from] MissingTargetAttributeError),
    /// The descriptor named an unsupported capability.
    #[error(transparent)]
    UnsupportedCapability(#[from] UnsupportedCapabilityError),
}

// ============================================================================
// SECTION: Binder Strategy
// ============================================================================

/// Per-service-type strategy resolving descriptors into grants and entries.
pub trait BinderStrategy {
    /// Returns the capabilities this strategy can resolve.
    fn supported_capabilities(&self) -> &BTreeSet<CapabilityTag>;

    /// Resolves the descriptor, mutating the source component on success.
    ///
    /// # Errors
    ///
    /// Returns [`BindError`] when the capability is unsupported, the access
    /// set violates the vocabulary, or a required target attribute is
    /// missing. On error the source component is left untouched.
    fn bind(
        &self,
        source: &mut SourceComponent,
        target: &TargetAttributes,
        descriptor: &BindingDescriptor,
        ctx: &BindContext,
    ) -> Result<(), BindError>;
}

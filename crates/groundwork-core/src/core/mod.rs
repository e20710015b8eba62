// crates/groundwork-core/src/core/mod.rs
// ============================================================================
// Module: Groundwork Core Types
// Description: Canonical Groundwork binding and component structures.
// Purpose: Provide stable, serializable types for component bindings.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Groundwork core types define component identifiers, the access-mode
//! vocabulary, binding descriptors, target attribute bags, and the
//! source-component mutation surface. These types are the canonical source
//! of truth for any derived provisioning surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod access;
pub mod attributes;
pub mod component;
pub mod descriptor;
pub mod hashing;
pub mod identifiers;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use access::AccessMode;
pub use attributes::MissingTargetAttributeError;
pub use attributes::TargetAttributes;
pub use component::BindingMutation;
pub use component::PermissionEffect;
pub use component::PermissionStatement;
pub use component::SourceComponent;
pub use descriptor::BindingDescriptor;
pub use descriptor::BindingDescriptorError;
pub use descriptor::OPTION_ENABLE_ENCRYPTION;
pub use descriptor::OPTION_REQUIRE_SECURE_ACCESS;
pub use descriptor::OPTION_REQUIRE_SECURE_NETWORKING;
pub use descriptor::OPTION_RETENTION_DAYS;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::CapabilityTag;
pub use identifiers::ComponentId;
pub use identifiers::ServiceType;

// crates/groundwork-binders/src/lib.rs
// ============================================================================
// Module: Groundwork Binders
// Description: Built-in binder strategies and registry utilities.
// Purpose: Provide per-service binding resolution aligned with Groundwork core.
// Dependencies: groundwork-core, serde
// ============================================================================

//! ## Overview
//! This crate ships the built-in binder strategies (queue, cluster, keys,
//! workflow, secrets, cdn, network) and a registry implementation that
//! routes binding descriptors by the capability tag's service prefix.
//! Strategies are deterministic, stage every emission before mutating the
//! source component, and fail closed on missing required target attributes.
//! Invariants:
//! - Bindings are routed via [`BindingRegistry`] by service-type identifier.
//! - A failed bind leaves the source component untouched.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cdn;
pub mod cluster;
pub mod keys;
pub mod network;
pub mod queue;
pub mod registry;
pub mod secrets;
pub mod workflow;

mod support;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cdn::ContentDeliveryBinder;
pub use cluster::ClusterBinder;
pub use keys::KeyBinder;
pub use network::NetworkBinder;
pub use queue::QueueBinder;
pub use registry::BindingRegistry;
pub use registry::ServiceCategory;
pub use secrets::SecretBinder;
pub use workflow::WorkflowBinder;

#[cfg(test)]
mod tests;

// crates/groundwork-binders/src/network.rs
// ============================================================================
// Module: Virtual Network Binder
// Description: Binder strategy for virtual-network placement targets.
// Purpose: Resolve network bindings into placement entries and describe grants.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! The network binder resolves the `network:vpc` capability. It emits mostly
//! environment contract data: placement entries exist only for attributes
//! the target network actually declares.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use groundwork_core::AccessMode;
use groundwork_core::BindContext;
use groundwork_core::BindError;
use groundwork_core::BinderStrategy;
use groundwork_core::BindingDescriptor;
use groundwork_core::BindingMutation;
use groundwork_core::CapabilityTag;
use groundwork_core::PermissionStatement;
use groundwork_core::SourceComponent;
use groundwork_core::TargetAttributes;

use crate::support;

// ============================================================================
// SECTION: Strategy
// ============================================================================

/// Binder strategy for virtual networks.
///
/// # Invariants
/// - Required target attribute: `vpc_id`.
/// - Subnet and security-group entries are presence-keyed, never required.
pub struct NetworkBinder {
    /// Capabilities this strategy resolves.
    capabilities: BTreeSet<CapabilityTag>,
}

impl NetworkBinder {
    /// Service-type identifier the registry keys this strategy under.
    pub const SERVICE_TYPE: &'static str = "network";

    /// Creates the network binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: support::capability_set(&["network:vpc"]),
        }
    }
}

impl Default for NetworkBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for NetworkBinder {
    fn supported_capabilities(&self) -> &BTreeSet<CapabilityTag> {
        &self.capabilities
    }

    fn bind(
        &self,
        source: &mut SourceComponent,
        target: &TargetAttributes,
        descriptor: &BindingDescriptor,
        ctx: &BindContext,
    ) -> Result<(), BindError> {
        let modes = support::precheck(&self.capabilities, descriptor)?;
        let vpc_id = target.require_string("vpc_id")?;

        let mut staged = BindingMutation::new();
        staged.set_env(ctx.prefixed("VPC_ID"), vpc_id);
        if let Some(cidr) = target.string("vpc_cidr") {
            staged.set_env(ctx.prefixed("VPC_CIDR"), cidr);
        }
        support::stage_network_placement(&mut staged, target, ctx);

        for mode in &modes {
            stage_access(&mut staged, *mode, vpc_id);
        }
        if descriptor.secure_mode_enabled() {
            support::stage_secure_access(&mut staged, target, descriptor, ctx);
        }
        staged.merge_env_defaults(&descriptor.env);
        staged.apply(source);
        Ok(())
    }
}

// ============================================================================
// SECTION: Per-Mode Resolution
// ============================================================================

/// Stages the grants one access mode contributes.
fn stage_access(staged: &mut BindingMutation, mode: AccessMode, vpc_id: &str) {
    match mode {
        AccessMode::Read => staged.grant(PermissionStatement::allow(
            ["network:DescribeVpcs", "network:DescribeSubnets", "network:DescribeSecurityGroups"],
            [vpc_id],
        )),
        AccessMode::Admin => staged.grant(PermissionStatement::allow(
            ["network:ModifyVpcAttribute", "network:CreateTags"],
            [vpc_id],
        )),
        _ => {}
    }
}

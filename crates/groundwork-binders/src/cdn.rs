// crates/groundwork-binders/src/cdn.rs
// ============================================================================
// Module: Content Delivery Binder
// Description: Binder strategy for content-delivery distributions.
// Purpose: Resolve distribution bindings into invalidation and update grants.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! The content-delivery binder resolves the `cdn:distribution` capability.
//! The public domain entry is emitted only when the target declares one.

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

/// Binder strategy for content-delivery distributions.
///
/// # Invariants
/// - Required target attributes: `distribution_id`, `distribution_arn`.
pub struct ContentDeliveryBinder {
    /// Capabilities this strategy resolves.
    capabilities: BTreeSet<CapabilityTag>,
}

impl ContentDeliveryBinder {
    /// Service-type identifier the registry keys this strategy under.
    pub const SERVICE_TYPE: &'static str = "cdn";

    /// Creates the content-delivery binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: support::capability_set(&["cdn:distribution"]),
        }
    }
}

impl Default for ContentDeliveryBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for ContentDeliveryBinder {
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
        let distribution_id = target.require_string("distribution_id")?;
        let distribution_arn = target.require_string("distribution_arn")?;

        let mut staged = BindingMutation::new();
        staged.set_env(ctx.prefixed("CDN_DISTRIBUTION_ID"), distribution_id);
        staged.set_env(ctx.prefixed("CDN_DISTRIBUTION_ARN"), distribution_arn);
        if let Some(domain) = target.string("domain_name") {
            staged.set_env(ctx.prefixed("CDN_DOMAIN_NAME"), domain);
        }

        for mode in &modes {
            stage_access(&mut staged, *mode, distribution_arn);
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
fn stage_access(staged: &mut BindingMutation, mode: AccessMode, distribution_arn: &str) {
    match mode {
        AccessMode::Read => staged.grant(PermissionStatement::allow(
            ["cdn:GetDistribution", "cdn:ListInvalidations"],
            [distribution_arn],
        )),
        AccessMode::Write => {
            staged
                .grant(PermissionStatement::allow(["cdn:CreateInvalidation"], [distribution_arn]));
        }
        AccessMode::Publish => staged.grant(PermissionStatement::allow(
            ["cdn:CreateInvalidation", "cdn:UpdateDistribution"],
            [distribution_arn],
        )),
        AccessMode::Admin => staged.grant(PermissionStatement::allow(
            ["cdn:UpdateDistribution", "cdn:TagResource"],
            [distribution_arn],
        )),
        _ => {}
    }
}

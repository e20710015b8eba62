// crates/groundwork-binders/src/keys.rs
// ============================================================================
// Module: Key Management Binder
// Description: Binder strategy for managed encryption and signing keys.
// Purpose: Resolve key bindings into cryptographic-use grants.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! The key binder resolves `keys:customer-managed` and `keys:signing`
//! capabilities. The same access modes map to different cryptographic
//! operations per capability: `encrypt`/`decrypt` resolve to Encrypt/Decrypt
//! for customer-managed keys and to Sign/Verify for signing keys.

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

/// Binder strategy for managed keys.
///
/// # Invariants
/// - Required target attributes: `key_id`, `key_arn`.
/// - Mode-to-operation mapping branches on the dispatched capability.
pub struct KeyBinder {
    /// Capabilities this strategy resolves.
    capabilities: BTreeSet<CapabilityTag>,
}

impl KeyBinder {
    /// Service-type identifier the registry keys this strategy under.
    pub const SERVICE_TYPE: &'static str = "keys";

    /// Capability tag for symmetric customer-managed keys.
    const CUSTOMER_MANAGED: &'static str = "keys:customer-managed";

    /// Creates the key binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: support::capability_set(&[Self::CUSTOMER_MANAGED, "keys:signing"]),
        }
    }
}

impl Default for KeyBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for KeyBinder {
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
        let key_id = target.require_string("key_id")?;
        let key_arn = target.require_string("key_arn")?;
        let customer_managed = descriptor.capability.as_str() == Self::CUSTOMER_MANAGED;

        let mut staged = BindingMutation::new();
        staged.set_env(ctx.prefixed("KMS_KEY_ID"), key_id);
        staged.set_env(ctx.prefixed("KMS_KEY_ARN"), key_arn);

        for mode in &modes {
            stage_access(&mut staged, *mode, key_arn, customer_managed);
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

/// Stages the grants one access mode contributes for the dispatched kind.
fn stage_access(
    staged: &mut BindingMutation,
    mode: AccessMode,
    key_arn: &str,
    customer_managed: bool,
) {
    match mode {
        AccessMode::Encrypt => {
            let actions: &[&str] = if customer_managed {
                &["keys:Encrypt", "keys:GenerateDataKey"]
            } else {
                &["keys:Sign"]
            };
            staged.grant(PermissionStatement::allow(actions.iter().copied(), [key_arn]));
        }
        AccessMode::Decrypt => {
            let actions: &[&str] =
                if customer_managed { &["keys:Decrypt"] } else { &["keys:Verify"] };
            staged.grant(PermissionStatement::allow(actions.iter().copied(), [key_arn]));
        }
        AccessMode::Read => {
            staged.grant(PermissionStatement::allow(["keys:DescribeKey"], [key_arn]));
        }
        AccessMode::Admin => staged.grant(PermissionStatement::allow(
            ["keys:EnableKeyRotation", "keys:TagResource"],
            [key_arn],
        )),
        AccessMode::Policy => staged.grant(PermissionStatement::allow(
            ["keys:GetKeyPolicy", "keys:PutKeyPolicy"],
            [key_arn],
        )),
        _ => {}
    }
}

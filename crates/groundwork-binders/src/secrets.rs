// crates/groundwork-binders/src/secrets.rs
// ============================================================================
// Module: Secret Store Binder
// Description: Binder strategy for managed secret-store entries.
// Purpose: Resolve secret bindings into value-access grants.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! The secret binder resolves the `secrets:secret` capability. Read grants
//! cover value retrieval only; rotation stays behind the `admin` mode so
//! consumers do not accumulate rotation rights by default.

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

/// Binder strategy for managed secrets.
///
/// # Invariants
/// - Required target attributes: `secret_name`, `secret_arn`.
pub struct SecretBinder {
    /// Capabilities this strategy resolves.
    capabilities: BTreeSet<CapabilityTag>,
}

impl SecretBinder {
    /// Service-type identifier the registry keys this strategy under.
    pub const SERVICE_TYPE: &'static str = "secrets";

    /// Creates the secret binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: support::capability_set(&["secrets:secret"]),
        }
    }
}

impl Default for SecretBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for SecretBinder {
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
        let secret_name = target.require_string("secret_name")?;
        let secret_arn = target.require_string("secret_arn")?;

        let mut staged = BindingMutation::new();
        staged.set_env(ctx.prefixed("SECRET_NAME"), secret_name);
        staged.set_env(ctx.prefixed("SECRET_ARN"), secret_arn);

        for mode in &modes {
            stage_access(&mut staged, *mode, secret_arn);
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
fn stage_access(staged: &mut BindingMutation, mode: AccessMode, secret_arn: &str) {
    match mode {
        AccessMode::Read => staged.grant(PermissionStatement::allow(
            ["secrets:GetSecretValue", "secrets:DescribeSecret"],
            [secret_arn],
        )),
        AccessMode::Write => {
            staged.grant(PermissionStatement::allow(["secrets:PutSecretValue"], [secret_arn]));
        }
        AccessMode::Admin => staged.grant(PermissionStatement::allow(
            ["secrets:RotateSecret", "secrets:UpdateSecret", "secrets:TagResource"],
            [secret_arn],
        )),
        _ => {}
    }
}

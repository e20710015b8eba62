// crates/groundwork-binders/src/support.rs
// ============================================================================
// Module: Binder Support Helpers
// Description: Shared pre-checks and secure-mode staging for all binders.
// Purpose: Keep cross-strategy logic as free functions, not inherited behavior.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! Every binder strategy performs the same pre-condition sequence before any
//! mutation: capability dispatch, then access-vocabulary re-validation. The
//! secure-mode pass is likewise shared: each sub-part is keyed off concrete
//! presence of the corresponding target attribute or descriptor option, and
//! only the audit entry is unconditional once secure mode is on. Helpers
//! stage into a [`BindingMutation`]; nothing touches the source component
//! until the invoking strategy applies the buffer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use groundwork_core::AccessMode;
use groundwork_core::BindContext;
use groundwork_core::BindError;
use groundwork_core::BindingDescriptor;
use groundwork_core::BindingMutation;
use groundwork_core::CapabilityTag;
use groundwork_core::OPTION_RETENTION_DAYS;
use groundwork_core::PermissionStatement;
use groundwork_core::TargetAttributes;
use groundwork_core::UnsupportedCapabilityError;

// ============================================================================
// SECTION: Attribute Names
// ============================================================================

/// Encryption key resource handle attribute.
pub(crate) const ATTR_KMS_KEY_ARN: &str = "kms_key_arn";
/// Encryption key identifier attribute.
pub(crate) const ATTR_KMS_KEY_ID: &str = "kms_key_id";
/// Virtual network identifier attribute.
pub(crate) const ATTR_VPC_ID: &str = "vpc_id";
/// Subnet placement attribute.
pub(crate) const ATTR_SUBNET_IDS: &str = "subnet_ids";
/// Security group placement attribute.
pub(crate) const ATTR_SECURITY_GROUP_IDS: &str = "security_group_ids";
/// Backup retention attribute.
pub(crate) const ATTR_BACKUP_RETENTION_DAYS: &str = "backup_retention_days";

// ============================================================================
// SECTION: Pre-Checks
// ============================================================================

/// Builds a capability set from static tags.
pub(crate) fn capability_set(tags: &[&str]) -> BTreeSet<CapabilityTag> {
    tags.iter().map(|tag| CapabilityTag::new(*tag)).collect()
}

/// Runs the shared pre-condition checks, returning the typed access modes.
///
/// # Errors
///
/// Returns [`BindError`] when the capability is outside the supported set or
/// any access tag falls outside the vocabulary (all violations listed).
pub(crate) fn precheck(
    supported: &BTreeSet<CapabilityTag>,
    descriptor: &BindingDescriptor,
) -> Result<BTreeSet<AccessMode>, BindError> {
    if !supported.contains(&descriptor.capability) {
        return Err(UnsupportedCapabilityError {
            capability: descriptor.capability.clone(),
            supported: supported.iter().map(|capability| capability.as_str().to_string()).collect(),
        }
        .into());
    }
    Ok(descriptor.access_modes()?)
}

// ============================================================================
// SECTION: Secure-Mode Pass
// ============================================================================

/// Stages the full secure-mode pass for one binding.
pub(crate) fn stage_secure_access(
    staged: &mut BindingMutation,
    target: &TargetAttributes,
    descriptor: &BindingDescriptor,
    ctx: &BindContext,
) {
    stage_encryption_access(staged, target, ctx);
    stage_network_placement(staged, target, ctx);
    stage_retention_policy(staged, target, descriptor, ctx);
    stage_audit_logging(staged, ctx);
}

/// Stages encryption-key grants and entries when the target declares a key.
pub(crate) fn stage_encryption_access(
    staged: &mut BindingMutation,
    target: &TargetAttributes,
    ctx: &BindContext,
) {
    if let Some(key_arn) = target.string(ATTR_KMS_KEY_ARN) {
        staged.grant(PermissionStatement::allow(
            ["keys:Encrypt", "keys:Decrypt", "keys:GenerateDataKey", "keys:DescribeKey"],
            [key_arn],
        ));
        staged.set_env(ctx.prefixed("KMS_KEY_ARN"), key_arn);
        if let Some(key_id) = target.string(ATTR_KMS_KEY_ID) {
            staged.set_env(ctx.prefixed("KMS_KEY_ID"), key_id);
        }
    }
}

/// Stages network-placement entries for attributes the target declares.
pub(crate) fn stage_network_placement(
    staged: &mut BindingMutation,
    target: &TargetAttributes,
    ctx: &BindContext,
) {
    if let Some(vpc_id) = target.string(ATTR_VPC_ID) {
        staged.set_env(ctx.prefixed("VPC_ID"), vpc_id);
    }
    if let Some(subnet_ids) = target.string_list(ATTR_SUBNET_IDS) {
        staged.set_env(ctx.prefixed("SUBNET_IDS"), subnet_ids.join(","));
    }
    if let Some(group_ids) = target.string_list(ATTR_SECURITY_GROUP_IDS) {
        staged.set_env(ctx.prefixed("SECURITY_GROUP_IDS"), group_ids.join(","));
    }
}

/// Stages the retention entry when the target or descriptor declares one.
pub(crate) fn stage_retention_policy(
    staged: &mut BindingMutation,
    target: &TargetAttributes,
    descriptor: &BindingDescriptor,
    ctx: &BindContext,
) {
    let retention = target
        .integer(ATTR_BACKUP_RETENTION_DAYS)
        .or_else(|| descriptor.option_u64(OPTION_RETENTION_DAYS));
    if let Some(days) = retention {
        staged.set_env(ctx.prefixed("BACKUP_RETENTION_DAYS"), days.to_string());
    }
}

/// Stages the unconditional audit-logging entry for secure mode.
pub(crate) fn stage_audit_logging(staged: &mut BindingMutation, ctx: &BindContext) {
    staged.set_env(ctx.prefixed("AUDIT_LOGGING"), "enabled");
}

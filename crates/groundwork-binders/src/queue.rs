// crates/groundwork-binders/src/queue.rs
// ============================================================================
// Module: Queue Binder
// Description: Binder strategy for managed message-queue targets.
// Purpose: Resolve queue bindings into receive/send grants and queue entries.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! The queue binder resolves `queue:standard` and `queue:fifo` capabilities.
//! Every successful bind emits the queue's identity entries; permission
//! statements are contributed per requested access mode and always scoped to
//! the queue's concrete resource handle. Modes with no queue meaning
//! contribute nothing.

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

/// Binder strategy for managed message queues.
///
/// # Invariants
/// - Required target attributes: `queue_name`, `queue_url`, `queue_arn`.
/// - All mode grants are scoped to the queue's resource handle.
pub struct QueueBinder {
    /// Capabilities this strategy resolves.
    capabilities: BTreeSet<CapabilityTag>,
}

impl QueueBinder {
    /// Service-type identifier the registry keys this strategy under.
    pub const SERVICE_TYPE: &'static str = "queue";

    /// Creates the queue binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: support::capability_set(&["queue:standard", "queue:fifo"]),
        }
    }
}

impl Default for QueueBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for QueueBinder {
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
        let queue_name = target.require_string("queue_name")?;
        let queue_url = target.require_string("queue_url")?;
        let queue_arn = target.require_string("queue_arn")?;

        let mut staged = BindingMutation::new();
        staged.set_env(ctx.prefixed("QUEUE_NAME"), queue_name);
        staged.set_env(ctx.prefixed("QUEUE_URL"), queue_url);
        staged.set_env(ctx.prefixed("QUEUE_ARN"), queue_arn);

        for mode in &modes {
            stage_access(&mut staged, *mode, queue_arn, target, ctx);
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

/// Stages the grants and entries one access mode contributes.
fn stage_access(
    staged: &mut BindingMutation,
    mode: AccessMode,
    queue_arn: &str,
    target: &TargetAttributes,
    ctx: &BindContext,
) {
    match mode {
        AccessMode::Read => staged.grant(PermissionStatement::allow(
            ["queue:ReceiveMessage", "queue:GetQueueAttributes"],
            [queue_arn],
        )),
        AccessMode::Write | AccessMode::Send => {
            staged.grant(PermissionStatement::allow(["queue:SendMessage"], [queue_arn]));
        }
        AccessMode::Poll => staged.grant(PermissionStatement::allow(
            ["queue:ReceiveMessage", "queue:ChangeMessageVisibility"],
            [queue_arn],
        )),
        AccessMode::Process => {
            staged.grant(PermissionStatement::allow(
                ["queue:ReceiveMessage", "queue:DeleteMessage"],
                [queue_arn],
            ));
            if let Some(timeout) = target.integer("visibility_timeout_seconds") {
                staged.set_env(ctx.prefixed("QUEUE_VISIBILITY_TIMEOUT"), timeout.to_string());
            }
        }
        AccessMode::Admin => staged.grant(PermissionStatement::allow(
            ["queue:PurgeQueue", "queue:SetQueueAttributes", "queue:TagQueue"],
            [queue_arn],
        )),
        _ => {}
    }
}

// crates/groundwork-binders/src/workflow.rs
// ============================================================================
// Module: Workflow Binder
// Description: Binder strategy for workflow-orchestration state machines.
// Purpose: Resolve workflow bindings into execution-control grants.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! The workflow binder resolves `workflow:state-machine` and
//! `workflow:express` capabilities. Express workflows additionally permit
//! synchronous invocation under the `invoke` mode.

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

/// Binder strategy for workflow state machines.
///
/// # Invariants
/// - Required target attributes: `state_machine_name`, `state_machine_arn`.
pub struct WorkflowBinder {
    /// Capabilities this strategy resolves.
    capabilities: BTreeSet<CapabilityTag>,
}

impl WorkflowBinder {
    /// Service-type identifier the registry keys this strategy under.
    pub const SERVICE_TYPE: &'static str = "workflow";

    /// Capability tag for express workflows.
    const EXPRESS: &'static str = "workflow:express";

    /// Creates the workflow binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: support::capability_set(&["workflow:state-machine", Self::EXPRESS]),
        }
    }
}

impl Default for WorkflowBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for WorkflowBinder {
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
        let machine_name = target.require_string("state_machine_name")?;
        let machine_arn = target.require_string("state_machine_arn")?;
        let express = descriptor.capability.as_str() == Self::EXPRESS;

        let mut staged = BindingMutation::new();
        staged.set_env(ctx.prefixed("STATE_MACHINE_NAME"), machine_name);
        staged.set_env(ctx.prefixed("STATE_MACHINE_ARN"), machine_arn);

        for mode in &modes {
            stage_access(&mut staged, *mode, machine_arn, express);
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
fn stage_access(staged: &mut BindingMutation, mode: AccessMode, machine_arn: &str, express: bool) {
    match mode {
        AccessMode::Invoke => {
            let actions: &[&str] = if express {
                &["workflow:StartExecution", "workflow:StartSyncExecution"]
            } else {
                &["workflow:StartExecution"]
            };
            staged.grant(PermissionStatement::allow(actions.iter().copied(), [machine_arn]));
        }
        AccessMode::Execute => staged.grant(PermissionStatement::allow(
            ["workflow:StartExecution", "workflow:StopExecution"],
            [machine_arn],
        )),
        AccessMode::Read => staged.grant(PermissionStatement::allow(
            ["workflow:DescribeStateMachine", "workflow:ListExecutions"],
            [machine_arn],
        )),
        AccessMode::Admin => staged.grant(PermissionStatement::allow(
            ["workflow:UpdateStateMachine", "workflow:TagResource"],
            [machine_arn],
        )),
        _ => {}
    }
}

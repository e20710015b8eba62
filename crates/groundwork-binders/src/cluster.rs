// crates/groundwork-binders/src/cluster.rs
// ============================================================================
// Module: Cluster Binder
// Description: Binder strategy for managed container/kubernetes clusters.
// Purpose: Resolve cluster bindings into task and service grants.
// Dependencies: groundwork-core
// ============================================================================

//! ## Overview
//! The cluster binder resolves `cluster:container` and `cluster:kubernetes`
//! capabilities. The cluster endpoint entry is emitted only when the target
//! declares one; the endpoint is an optional attribute, not a pre-condition.

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

/// Binder strategy for managed clusters.
///
/// # Invariants
/// - Required target attributes: `cluster_name`, `cluster_arn`.
pub struct ClusterBinder {
    /// Capabilities this strategy resolves.
    capabilities: BTreeSet<CapabilityTag>,
}

impl ClusterBinder {
    /// Service-type identifier the registry keys this strategy under.
    pub const SERVICE_TYPE: &'static str = "cluster";

    /// Creates the cluster binder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: support::capability_set(&["cluster:container", "cluster:kubernetes"]),
        }
    }
}

impl Default for ClusterBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for ClusterBinder {
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
        let cluster_name = target.require_string("cluster_name")?;
        let cluster_arn = target.require_string("cluster_arn")?;

        let mut staged = BindingMutation::new();
        staged.set_env(ctx.prefixed("CLUSTER_NAME"), cluster_name);
        staged.set_env(ctx.prefixed("CLUSTER_ARN"), cluster_arn);
        if let Some(endpoint) = target.string("cluster_endpoint") {
            staged.set_env(ctx.prefixed("CLUSTER_ENDPOINT"), endpoint);
        }

        for mode in &modes {
            stage_access(&mut staged, *mode, cluster_arn, ctx);
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
fn stage_access(staged: &mut BindingMutation, mode: AccessMode, cluster_arn: &str, ctx: &BindContext) {
    match mode {
        AccessMode::Read => staged.grant(PermissionStatement::allow(
            ["cluster:DescribeCluster", "cluster:ListServices"],
            [cluster_arn],
        )),
        AccessMode::Write => staged.grant(PermissionStatement::allow(
            ["cluster:UpdateService"],
            [cluster_arn],
        )),
        AccessMode::Execute => {
            staged.grant(PermissionStatement::allow(
                ["cluster:RunTask", "cluster:ExecuteCommand"],
                [cluster_arn],
            ));
            staged.set_env(ctx.prefixed("CLUSTER_EXEC_COMMAND_ENABLED"), "true");
        }
        AccessMode::Poll => staged.grant(PermissionStatement::allow(
            ["cluster:ListTasks", "cluster:DescribeTasks"],
            [cluster_arn],
        )),
        AccessMode::Admin => staged.grant(PermissionStatement::allow(
            ["cluster:DeleteService", "cluster:PutClusterCapacityProviders", "cluster:TagResource"],
            [cluster_arn],
        )),
        _ => {}
    }
}

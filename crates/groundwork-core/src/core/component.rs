// crates/groundwork-core/src/core/component.rs
// ============================================================================
// Module: Groundwork Source Component Surface
// Description: Permission statements and the source-component mutation surface.
// Purpose: Accumulate least-privilege grants and environment contracts.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A source component accumulates the output of binding resolution: an
//! ordered permission-statement list and an environment-variable map. Both
//! operations are monotonic; a later write for the same environment key wins,
//! but strategies are expected to write each key at most once. Strategies
//! stage emissions in a [`BindingMutation`] and apply the buffer only after
//! every pre-condition check succeeds, so a failed bind leaves the component
//! untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ComponentId;

// ============================================================================
// SECTION: Permission Statements
// ============================================================================

/// Effect of a permission statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionEffect {
    /// Grant the listed actions.
    Allow,
    /// Explicitly deny the listed actions.
    Deny,
}

/// One least-privilege permission statement scoped to concrete resources.
///
/// # Invariants
/// - `resources` reference concrete handles read from a target attribute bag
///   whenever the target declares one; wildcards appear only when no handle
///   exists for the action class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStatement {
    /// Statement effect.
    pub effect: PermissionEffect,
    /// Service-namespaced action identifiers.
    pub actions: Vec<String>,
    /// Concrete resource handles the actions are scoped to.
    pub resources: Vec<String>,
}

impl PermissionStatement {
    /// Creates an allow statement over the given actions and resources.
    #[must_use]
    pub fn allow(
        actions: impl IntoIterator<Item = impl Into<String>>,
        resources: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            effect: PermissionEffect::Allow,
            actions: actions.into_iter().map(Into::into).collect(),
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// SECTION: Source Component
// ============================================================================

/// Mutation surface of the component being bound to targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceComponent {
    /// Component instance identifier.
    id: ComponentId,
    /// Accumulated permission statements, in grant order.
    permissions: Vec<PermissionStatement>,
    /// Accumulated environment contract.
    env: BTreeMap<String, String>,
}

impl SourceComponent {
    /// Creates an empty source component.
    #[must_use]
    pub fn new(id: impl Into<ComponentId>) -> Self {
        Self {
            id: id.into(),
            permissions: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Returns the component identifier.
    #[must_use]
    pub const fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Appends one permission statement to the accumulated set.
    ///
    /// Exact duplicates are skipped so replaying a binding with identical
    /// inputs yields the same accumulated state.
    pub fn grant(&mut self, statement: PermissionStatement) {
        if !self.permissions.contains(&statement) {
            self.permissions.push(statement);
        }
    }

    /// Sets one environment-variable entry (last write for a key wins).
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let _ = self.env.insert(key.into(), value.into());
    }

    /// Returns the accumulated permission statements.
    #[must_use]
    pub fn permissions(&self) -> &[PermissionStatement] {
        &self.permissions
    }

    /// Returns the accumulated environment contract.
    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }
}

// ============================================================================
// SECTION: Staged Mutations
// ============================================================================

/// Staging buffer for one binding invocation's emissions.
///
/// # Invariants
/// - Nothing reaches the source component until [`BindingMutation::apply`],
///   giving strategies all-or-nothing failure semantics.
/// - Descriptor-seeded env defaults never overwrite strategy-written keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingMutation {
    /// Staged permission statements, in emission order.
    permissions: Vec<PermissionStatement>,
    /// Staged environment entries.
    env: BTreeMap<String, String>,
}

impl BindingMutation {
    /// Creates an empty staging buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages one permission statement.
    pub fn grant(&mut self, statement: PermissionStatement) {
        self.permissions.push(statement);
    }

    /// Stages one environment entry (last write for a key wins).
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let _ = self.env.insert(key.into(), value.into());
    }

    /// Merges caller-seeded env entries at lowest precedence.
    pub fn merge_env_defaults(&mut self, defaults: &BTreeMap<String, String>) {
        for (key, value) in defaults {
            if !self.env.contains_key(key) {
                let _ = self.env.insert(key.clone(), value.clone());
            }
        }
    }

    /// Returns true when nothing has been staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty() && self.env.is_empty()
    }

    /// Returns the staged permission statements.
    #[must_use]
    pub fn permissions(&self) -> &[PermissionStatement] {
        &self.permissions
    }

    /// Returns the staged environment entries.
    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Applies every staged emission onto the source component.
    pub fn apply(&self, source: &mut SourceComponent) {
        for statement in &self.permissions {
            source.grant(statement.clone());
        }
        for (key, value) in &self.env {
            source.set_env(key.clone(), value.clone());
        }
    }
}

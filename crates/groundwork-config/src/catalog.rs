// crates/groundwork-config/src/catalog.rs
// ============================================================================
// Module: Component Schema Catalog
// Description: Schema, fallback, and profile bundles per component family.
// Purpose: Provide the default layers the resolution engine merges.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A catalog entry bundles everything resolution needs for one component
//! family: the schema document (with per-field defaults), the hardcoded
//! fallback literal baked into the engine, and the named profile overlays.
//! Profile selection is total: an unrecognized profile key selects the
//! mandatory `baseline` overlay rather than failing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::schema::compute_group_entry;
use crate::schema::container_cluster_entry;
use crate::schema::message_queue_entry;
use crate::schema::relational_database_entry;

// ============================================================================
// SECTION: Profile Keys
// ============================================================================

/// Profile selected for unrecognized keys; its overlay may be empty.
pub const PROFILE_BASELINE: &str = "baseline";
/// Profile raising encryption, retention, and network posture.
pub const PROFILE_HARDENED: &str = "hardened";
/// Profile trimming capacity for low-cost environments.
pub const PROFILE_COST_OPTIMIZED: &str = "cost-optimized";

// ============================================================================
// SECTION: Component Schema
// ============================================================================

/// Default layers and schema for one component family.
///
/// # Invariants
/// - `profiles` always contains a `baseline` entry (inserted empty when the
///   builder omits it), so profile selection never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSchema {
    /// Component family identifier (catalog key).
    component_type: String,
    /// JSON-Schema document with per-field defaults.
    schema: Value,
    /// Hardcoded fallback literal (lowest-precedence layer).
    fallback: Value,
    /// Named profile overlays keyed by profile name.
    profiles: BTreeMap<String, Value>,
}

impl ComponentSchema {
    /// Creates a catalog entry, guaranteeing a baseline profile exists.
    #[must_use]
    pub fn new(
        component_type: impl Into<String>,
        schema: Value,
        fallback: Value,
        mut profiles: BTreeMap<String, Value>,
    ) -> Self {
        let _ = profiles
            .entry(PROFILE_BASELINE.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        Self {
            component_type: component_type.into(),
            schema,
            fallback,
            profiles,
        }
    }

    /// Returns the component family identifier.
    #[must_use]
    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    /// Returns the schema document.
    #[must_use]
    pub const fn schema(&self) -> &Value {
        &self.schema
    }

    /// Returns the hardcoded fallback literal.
    #[must_use]
    pub const fn fallback(&self) -> &Value {
        &self.fallback
    }

    /// Returns the named profile overlays.
    #[must_use]
    pub const fn profiles(&self) -> &BTreeMap<String, Value> {
        &self.profiles
    }

    /// Returns the overlay for a profile key, falling back to baseline.
    #[must_use]
    pub fn profile_overlay(&self, profile_key: &str) -> &Value {
        self.profiles
            .get(profile_key)
            .or_else(|| self.profiles.get(PROFILE_BASELINE))
            .unwrap_or(&Value::Null)
    }
}

// ============================================================================
// SECTION: Component Catalog
// ============================================================================

/// Catalog of component schemas keyed by component type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentCatalog {
    /// Catalog entries keyed by component family identifier.
    entries: BTreeMap<String, ComponentSchema>,
}

impl ComponentCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with every built-in component schema registered.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(compute_group_entry());
        catalog.register(message_queue_entry());
        catalog.register(container_cluster_entry());
        catalog.register(relational_database_entry());
        catalog
    }

    /// Registers a schema, replacing any prior entry for the same type.
    pub fn register(&mut self, entry: ComponentSchema) {
        let _ = self.entries.insert(entry.component_type().to_string(), entry);
    }

    /// Returns the entry for a component type, if registered.
    #[must_use]
    pub fn get(&self, component_type: &str) -> Option<&ComponentSchema> {
        self.entries.get(component_type)
    }

    /// Returns every registered component type in sorted order.
    #[must_use]
    pub fn component_types(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

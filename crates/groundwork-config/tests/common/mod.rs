// crates/groundwork-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for resolution and validation tests.
// Purpose: Reduce duplication across integration tests for groundwork-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use groundwork_config::ComponentCatalog;
use groundwork_config::ComponentSchema;
use groundwork_config::ResolvedConfig;
use serde_json::Value;

/// Returns the built-in component catalog.
pub fn catalog() -> ComponentCatalog {
    ComponentCatalog::builtin()
}

/// Returns an empty partial configuration.
pub fn empty_config() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Looks up a catalog entry, reporting a readable error on absence.
pub fn entry(catalog: &ComponentCatalog, component_type: &str) -> Result<ComponentSchema, String> {
    catalog
        .get(component_type)
        .cloned()
        .ok_or_else(|| format!("missing catalog entry: {component_type}"))
}

/// Resolves a partial config, stringifying any failure for test reporting.
pub fn resolve(
    catalog: &ComponentCatalog,
    component_type: &str,
    user: &Value,
    profile: &str,
) -> Result<ResolvedConfig, String> {
    entry(catalog, component_type)?.resolve(user, profile).map_err(|err| err.to_string())
}

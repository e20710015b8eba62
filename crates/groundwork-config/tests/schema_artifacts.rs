//! Schema artifact validation tests for groundwork-config.
// crates/groundwork-config/tests/schema_artifacts.rs
// ============================================================================
// Module: Schema Artifact Validation Tests
// Description: Validate generated component schemas with an external validator.
// Purpose: Prevent drift between the catalog and standard JSON Schema.
// Dependencies: groundwork-config, jsonschema
// ============================================================================

use groundwork_config::PROFILE_BASELINE;
use groundwork_config::PROFILE_COST_OPTIMIZED;
use groundwork_config::PROFILE_HARDENED;
use jsonschema::Draft;
use serde_json::json;

mod common;

type TestResult = Result<(), String>;

#[test]
fn every_builtin_schema_compiles_as_draft_2020_12() -> TestResult {
    let catalog = common::catalog();
    for component_type in catalog.component_types() {
        let entry = common::entry(&catalog, &component_type)?;
        let _ = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(entry.schema())
            .map_err(|err| format!("{component_type}: {err}"))?;
    }
    Ok(())
}

#[test]
fn resolved_configs_validate_under_the_external_validator() -> TestResult {
    let catalog = common::catalog();
    for component_type in catalog.component_types() {
        let entry = common::entry(&catalog, &component_type)?;
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(entry.schema())
            .map_err(|err| format!("{component_type}: {err}"))?;
        for profile in [PROFILE_BASELINE, PROFILE_HARDENED, PROFILE_COST_OPTIMIZED] {
            let resolved =
                common::resolve(&catalog, &component_type, &common::empty_config(), profile)?;
            if !validator.is_valid(resolved.as_value()) {
                return Err(format!(
                    "resolved {component_type} under {profile} rejected by external validator"
                ));
            }
        }
    }
    Ok(())
}

#[test]
fn external_validator_agrees_on_unknown_keys() -> TestResult {
    let catalog = common::catalog();
    let entry = common::entry(&catalog, "compute-group")?;
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(entry.schema())
        .map_err(|err| err.to_string())?;
    let invalid = json!({"storage": {"bogus": 1}});
    if validator.is_valid(&invalid) {
        return Err("external validator accepted an undeclared key".to_string());
    }
    Ok(())
}

//! Resolution engine tests for groundwork-config.
// crates/groundwork-config/tests/resolution_unit.rs
// =============================================================================
// Module: Resolution Engine Tests
// Description: Exercise layered defaulting, normalization, and validation.
// Purpose: Pin the precedence law, idempotence, and no-silent-erasure rules.
// =============================================================================

use groundwork_config::PROFILE_BASELINE;
use groundwork_config::PROFILE_HARDENED;
use serde_json::Value;
use serde_json::json;

mod common;

type TestResult = Result<(), String>;

/// Reads a pointer out of a resolved config, failing readably when absent.
fn pointer<'a>(config: &'a groundwork_config::ResolvedConfig, path: &str) -> Result<&'a Value, String> {
    config.pointer(path).ok_or_else(|| format!("missing resolved value at {path}"))
}

#[test]
fn empty_config_under_baseline_yields_fallback_scaling() -> TestResult {
    let catalog = common::catalog();
    let resolved =
        common::resolve(&catalog, "compute-group", &common::empty_config(), PROFILE_BASELINE)?;
    if pointer(&resolved, "/scaling")? != &json!({"min": 1, "max": 3, "desired": 2}) {
        return Err(format!("unexpected scaling: {:?}", resolved.pointer("/scaling")));
    }
    Ok(())
}

#[test]
fn user_value_wins_over_every_lower_layer() -> TestResult {
    let catalog = common::catalog();
    let user = json!({"instance_type": "m5.large"});
    let resolved = common::resolve(&catalog, "compute-group", &user, PROFILE_BASELINE)?;
    if pointer(&resolved, "/instance_type")? != &json!("m5.large") {
        return Err(format!("user override lost: {:?}", resolved.pointer("/instance_type")));
    }
    Ok(())
}

#[test]
fn partial_nested_object_keeps_sibling_defaults() -> TestResult {
    let catalog = common::catalog();
    let user = json!({"storage": {"encrypted": true}});
    let resolved = common::resolve(&catalog, "compute-group", &user, PROFILE_BASELINE)?;
    if pointer(&resolved, "/storage/encrypted")? != &json!(true) {
        return Err("user leaf lost".to_string());
    }
    for sibling in ["/storage/size_gb", "/storage/volume_type", "/storage/retention_days"] {
        if resolved.pointer(sibling).is_none() {
            return Err(format!("sibling default missing at {sibling}"));
        }
    }
    Ok(())
}

#[test]
fn partial_network_object_keeps_sibling_defaults() -> TestResult {
    let catalog = common::catalog();
    let user = json!({"network": {"subnet_type": "PUBLIC"}});
    let resolved = common::resolve(&catalog, "compute-group", &user, PROFILE_BASELINE)?;
    if pointer(&resolved, "/network/subnet_type")? != &json!("PUBLIC") {
        return Err("user subnet type lost".to_string());
    }
    if pointer(&resolved, "/network/assign_public_ip")? != &json!(false) {
        return Err("sibling assign_public_ip missing or wrong".to_string());
    }
    Ok(())
}

#[test]
fn undeclared_key_fails_with_named_violation() -> TestResult {
    let catalog = common::catalog();
    let user = json!({"storage": {"bogus": 1}});
    match common::resolve(&catalog, "compute-group", &user, PROFILE_BASELINE) {
        Ok(_) => Err("expected resolution to fail on unknown key".to_string()),
        Err(message) => {
            if !message.contains("bogus") {
                return Err(format!("violation does not name the key: {message}"));
            }
            Ok(())
        }
    }
}

#[test]
fn validation_failure_reports_every_violation() -> TestResult {
    let catalog = common::catalog();
    let user = json!({"storage": {"bogus": 1}, "network": {"subnet_type": "EDGE"}});
    match common::resolve(&catalog, "compute-group", &user, PROFILE_BASELINE) {
        Ok(_) => Err("expected resolution to fail".to_string()),
        Err(message) => {
            if !(message.contains("bogus") && message.contains("EDGE")) {
                return Err(format!("expected both violations in one report: {message}"));
            }
            Ok(())
        }
    }
}

#[test]
fn unknown_profile_key_selects_baseline() -> TestResult {
    let catalog = common::catalog();
    let baseline =
        common::resolve(&catalog, "message-queue", &common::empty_config(), PROFILE_BASELINE)?;
    let unknown =
        common::resolve(&catalog, "message-queue", &common::empty_config(), "fedramp-high")?;
    if baseline != unknown {
        return Err("unknown profile did not fall back to baseline".to_string());
    }
    Ok(())
}

#[test]
fn hardened_profile_overlays_between_defaults_and_user() -> TestResult {
    let catalog = common::catalog();
    let resolved =
        common::resolve(&catalog, "message-queue", &common::empty_config(), PROFILE_HARDENED)?;
    if pointer(&resolved, "/encryption/enabled")? != &json!(true) {
        return Err("hardened profile encryption overlay missing".to_string());
    }
    if pointer(&resolved, "/dead_letter/max_receive_count")? != &json!(5) {
        return Err("sibling default missing under profile overlay".to_string());
    }

    let user = json!({"encryption": {"enabled": false}});
    let overridden = common::resolve(&catalog, "message-queue", &user, PROFILE_HARDENED)?;
    if pointer(&overridden, "/encryption/enabled")? != &json!(false) {
        return Err("user layer did not win over profile overlay".to_string());
    }
    Ok(())
}

#[test]
fn user_array_replaces_lower_layer_array() -> TestResult {
    let catalog = common::catalog();
    let user = json!({"security_groups": ["sg-a", "sg-b"]});
    let resolved = common::resolve(&catalog, "compute-group", &user, PROFILE_BASELINE)?;
    if pointer(&resolved, "/security_groups")? != &json!(["sg-a", "sg-b"]) {
        return Err("user array did not replace defaults".to_string());
    }
    Ok(())
}

#[test]
fn arrays_default_to_empty_lists() -> TestResult {
    let catalog = common::catalog();
    let resolved =
        common::resolve(&catalog, "compute-group", &common::empty_config(), PROFILE_BASELINE)?;
    if pointer(&resolved, "/security_groups")? != &json!([]) {
        return Err("array field did not default to empty list".to_string());
    }
    Ok(())
}

#[test]
fn resolution_is_idempotent() -> TestResult {
    let catalog = common::catalog();
    for component_type in catalog.component_types() {
        let user = json!({"tags": {"team": "platform"}});
        let first = common::resolve(&catalog, &component_type, &user, PROFILE_HARDENED)?;
        let second =
            common::resolve(&catalog, &component_type, &first.as_partial(), PROFILE_HARDENED)?;
        if first != second {
            return Err(format!("resolution not idempotent for {component_type}"));
        }
    }
    Ok(())
}

#[test]
fn resolved_digest_is_stable_across_resolutions() -> TestResult {
    let catalog = common::catalog();
    let first =
        common::resolve(&catalog, "relational-database", &common::empty_config(), PROFILE_BASELINE)?;
    let second =
        common::resolve(&catalog, "relational-database", &common::empty_config(), PROFILE_BASELINE)?;
    let digest_a = first.digest().map_err(|err| err.to_string())?;
    let digest_b = second.digest().map_err(|err| err.to_string())?;
    if digest_a != digest_b {
        return Err("digest not stable for identical resolutions".to_string());
    }
    Ok(())
}

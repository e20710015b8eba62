//! Deep-merge precedence tests for groundwork-config.
// crates/groundwork-config/tests/merge_unit.rs
// =============================================================================
// Module: Deep Merge Tests
// Description: Exercise the layer-merge precedence law edge cases.
// Purpose: Keep the precedence semantics centrally testable.
// =============================================================================

use groundwork_config::deep_merge;
use groundwork_config::merge_layers;
use serde_json::Value;
use serde_json::json;

type TestResult = Result<(), String>;

/// Asserts two values are equal with a readable diff message.
fn expect_eq(actual: &Value, expected: &Value) -> TestResult {
    if actual != expected {
        return Err(format!("merge mismatch: {actual} vs {expected}"));
    }
    Ok(())
}

#[test]
fn object_fields_merge_recursively() -> TestResult {
    let mut base = json!({"storage": {"encrypted": false, "size_gb": 20}});
    deep_merge(&mut base, &json!({"storage": {"encrypted": true}}));
    expect_eq(&base, &json!({"storage": {"encrypted": true, "size_gb": 20}}))
}

#[test]
fn arrays_replace_wholesale_never_concatenate() -> TestResult {
    let mut base = json!({"security_groups": ["sg-default"]});
    deep_merge(&mut base, &json!({"security_groups": ["sg-a", "sg-b"]}));
    expect_eq(&base, &json!({"security_groups": ["sg-a", "sg-b"]}))
}

#[test]
fn absent_overlay_key_never_erases_base_value() -> TestResult {
    let mut base = json!({"instance_type": "t3.micro", "multi_az": true});
    deep_merge(&mut base, &json!({"instance_type": "m5.large"}));
    expect_eq(&base, &json!({"instance_type": "m5.large", "multi_az": true}))
}

#[test]
fn explicit_null_overrides_base_value() -> TestResult {
    let mut base = json!({"iops": 3000});
    deep_merge(&mut base, &json!({"iops": null}));
    expect_eq(&base, &json!({"iops": null}))
}

#[test]
fn falsy_values_are_present_overrides() -> TestResult {
    let mut base = json!({"count": 5, "enabled": true, "label": "x"});
    deep_merge(&mut base, &json!({"count": 0, "enabled": false, "label": ""}));
    expect_eq(&base, &json!({"count": 0, "enabled": false, "label": ""}))
}

#[test]
fn layers_fold_lowest_precedence_first() -> TestResult {
    let fallback = json!({"instance_type": "t3.micro", "scaling": {"min": 1}});
    let profile = json!({"scaling": {"min": 2}});
    let user = json!({"instance_type": "m5.large"});
    let merged = merge_layers(&[&fallback, &profile, &user]);
    expect_eq(&merged, &json!({"instance_type": "m5.large", "scaling": {"min": 2}}))
}

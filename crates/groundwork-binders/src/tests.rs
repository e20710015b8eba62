// crates/groundwork-binders/src/tests.rs
// ============================================================================
// Module: Binder Support Unit Tests
// Description: Unit tests for the shared pre-check and secure-mode helpers.
// ============================================================================

//! Unit tests for crate-internal support helpers.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use groundwork_core::BindContext;
use groundwork_core::BindError;
use groundwork_core::BindingDescriptor;
use groundwork_core::BindingMutation;
use groundwork_core::TargetAttributes;

use crate::support;

/// Returns a descriptor for queue reads used across helper tests.
fn read_descriptor() -> BindingDescriptor {
    BindingDescriptor::new("api", "jobs", "queue:standard", ["read"]).unwrap()
}

/// Returns a context without an environment prefix.
fn ctx() -> BindContext {
    BindContext::new("api", "jobs")
}

#[test]
fn precheck_rejects_capability_outside_supported_set() {
    let supported = support::capability_set(&["queue:standard", "queue:fifo"]);
    let descriptor = BindingDescriptor::new("api", "jobs", "queue:premium", ["read"]).unwrap();
    match support::precheck(&supported, &descriptor) {
        Err(BindError::UnsupportedCapability(err)) => {
            assert_eq!(err.supported, vec!["queue:fifo".to_string(), "queue:standard".to_string()]);
        }
        other => panic!("expected unsupported capability, got {other:?}"),
    }
}

#[test]
fn encryption_pass_is_keyed_off_key_presence() {
    let mut staged = BindingMutation::new();
    let bare = TargetAttributes::new("jobs");
    support::stage_encryption_access(&mut staged, &bare, &ctx());
    assert!(staged.is_empty());

    let keyed = TargetAttributes::new("jobs")
        .with("kms_key_arn", "arn:keys/k1")
        .with("kms_key_id", "k1");
    support::stage_encryption_access(&mut staged, &keyed, &ctx());
    assert_eq!(staged.permissions().len(), 1);
    assert_eq!(staged.permissions()[0].resources, vec!["arn:keys/k1".to_string()]);
    assert_eq!(staged.env().get("KMS_KEY_ARN"), Some(&"arn:keys/k1".to_string()));
    assert_eq!(staged.env().get("KMS_KEY_ID"), Some(&"k1".to_string()));
}

#[test]
fn retention_prefers_target_attribute_over_descriptor_option() {
    let descriptor = read_descriptor().with_option("retention_days", 14);
    let target = TargetAttributes::new("jobs").with("backup_retention_days", 30);

    let mut staged = BindingMutation::new();
    support::stage_retention_policy(&mut staged, &target, &descriptor, &ctx());
    assert_eq!(staged.env().get("BACKUP_RETENTION_DAYS"), Some(&"30".to_string()));

    let mut fallback = BindingMutation::new();
    support::stage_retention_policy(&mut fallback, &TargetAttributes::new("jobs"), &descriptor, &ctx());
    assert_eq!(fallback.env().get("BACKUP_RETENTION_DAYS"), Some(&"14".to_string()));
}

#[test]
fn retention_is_skipped_when_nothing_declares_it() {
    let mut staged = BindingMutation::new();
    support::stage_retention_policy(&mut staged, &TargetAttributes::new("jobs"), &read_descriptor(), &ctx());
    assert!(staged.is_empty());
}

#[test]
fn network_placement_emits_only_declared_attributes() {
    let target = TargetAttributes::new("jobs")
        .with("vpc_id", "vpc-1")
        .with("subnet_ids", serde_json::json!(["subnet-a", "subnet-b"]));

    let mut staged = BindingMutation::new();
    support::stage_network_placement(&mut staged, &target, &ctx());
    assert_eq!(staged.env().get("VPC_ID"), Some(&"vpc-1".to_string()));
    assert_eq!(staged.env().get("SUBNET_IDS"), Some(&"subnet-a,subnet-b".to_string()));
    assert!(!staged.env().contains_key("SECURITY_GROUP_IDS"));
}

// crates/groundwork-binders/tests/secure_mode_unit.rs
// ============================================================================
// Module: Secure Mode Tests
// Description: Tests for the attribute-conditional secure-mode pass.
// ============================================================================
//! ## Overview
//! Validates that secure-mode emissions are keyed off concrete target
//! attributes and descriptor options, never off hidden global settings.

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

use groundwork_binders::QueueBinder;
use groundwork_core::BindContext;
use groundwork_core::BinderStrategy;
use groundwork_core::BindingDescriptor;
use groundwork_core::SourceComponent;
use groundwork_core::TargetAttributes;

/// Returns a queue target bag without any secure-feature attributes.
fn plain_target() -> TargetAttributes {
    TargetAttributes::new("jobs")
        .with("queue_name", "jobs")
        .with("queue_url", "https://queue/jobs")
        .with("queue_arn", "arn:queue/jobs")
}

/// Returns a secure-mode descriptor for queue reads.
fn secure_descriptor() -> BindingDescriptor {
    BindingDescriptor::new("api", "jobs", "queue:standard", ["read"])
        .unwrap()
        .with_option("require_secure_access", true)
}

/// Binds a target with a descriptor and returns the mutated source.
fn bind(target: &TargetAttributes, descriptor: &BindingDescriptor) -> SourceComponent {
    let binder = QueueBinder::new();
    let mut source = SourceComponent::new("api");
    binder.bind(&mut source, target, descriptor, &BindContext::new("api", "jobs")).unwrap();
    source
}

// ============================================================================
// SECTION: Encryption Conditionality
// ============================================================================

/// Tests no key entry is emitted when the target declares no key.
#[test]
fn test_secure_mode_without_key_emits_no_key_entry() {
    let source = bind(&plain_target(), &secure_descriptor());
    assert!(!source.env().contains_key("KMS_KEY_ARN"));
    assert!(!source.env().contains_key("KMS_KEY_ID"));
    for statement in source.permissions() {
        for action in &statement.actions {
            assert!(!action.starts_with("keys:"), "unexpected key grant {action}");
        }
    }
}

/// Tests a declared key yields exactly one key entry and a scoped grant.
#[test]
fn test_secure_mode_with_key_emits_one_entry_and_scoped_grant() {
    let target = plain_target().with("kms_key_arn", "arn:keys/k1");
    let source = bind(&target, &secure_descriptor());

    assert_eq!(source.env().get("KMS_KEY_ARN"), Some(&"arn:keys/k1".to_string()));
    let key_statements: Vec<_> = source
        .permissions()
        .iter()
        .filter(|statement| statement.actions.iter().any(|action| action.starts_with("keys:")))
        .collect();
    assert_eq!(key_statements.len(), 1);
    assert_eq!(key_statements[0].resources, vec!["arn:keys/k1".to_string()]);
}

// ============================================================================
// SECTION: Placement, Retention, Audit
// ============================================================================

/// Tests placement entries appear only for declared attributes.
#[test]
fn test_network_entries_require_declared_placement() {
    let bare = bind(&plain_target(), &secure_descriptor());
    assert!(!bare.env().contains_key("VPC_ID"));
    assert!(!bare.env().contains_key("SUBNET_IDS"));

    let placed = plain_target()
        .with("vpc_id", "vpc-1")
        .with("security_group_ids", serde_json::json!(["sg-1"]));
    let source = bind(&placed, &secure_descriptor());
    assert_eq!(source.env().get("VPC_ID"), Some(&"vpc-1".to_string()));
    assert_eq!(source.env().get("SECURITY_GROUP_IDS"), Some(&"sg-1".to_string()));
    assert!(!source.env().contains_key("SUBNET_IDS"));
}

/// Tests retention entries require a declared policy.
#[test]
fn test_retention_entry_requires_declared_policy() {
    let bare = bind(&plain_target(), &secure_descriptor());
    assert!(!bare.env().contains_key("BACKUP_RETENTION_DAYS"));

    let optioned = secure_descriptor().with_option("retention_days", 21);
    let source = bind(&plain_target(), &optioned);
    assert_eq!(source.env().get("BACKUP_RETENTION_DAYS"), Some(&"21".to_string()));
}

/// Tests the audit entry is unconditional once secure mode is on.
#[test]
fn test_audit_entry_tracks_secure_mode() {
    let secure = bind(&plain_target(), &secure_descriptor());
    assert_eq!(secure.env().get("AUDIT_LOGGING"), Some(&"enabled".to_string()));

    let plain = BindingDescriptor::new("api", "jobs", "queue:standard", ["read"]).unwrap();
    let source = bind(&plain_target(), &plain);
    assert!(!source.env().contains_key("AUDIT_LOGGING"));
}

/// Tests every secure toggle triggers the pass, not just the primary one.
#[test]
fn test_each_toggle_enables_the_secure_pass() {
    for option in ["require_secure_access", "require_secure_networking", "enable_encryption"] {
        let descriptor = BindingDescriptor::new("api", "jobs", "queue:standard", ["read"])
            .unwrap()
            .with_option(option, true);
        let source = bind(&plain_target(), &descriptor);
        assert_eq!(
            source.env().get("AUDIT_LOGGING"),
            Some(&"enabled".to_string()),
            "toggle {option} did not enable the secure pass"
        );
    }
}

// crates/groundwork-core/tests/descriptor_unit.rs
// ============================================================================
// Module: Binding Descriptor Tests
// Description: Tests for descriptor construction-time shape validation.
// ============================================================================
//! ## Overview
//! Validates capability namespacing and access-vocabulary enforcement,
//! including the requirement that every offending value is reported at once.

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

use groundwork_core::AccessMode;
use groundwork_core::BindingDescriptor;
use groundwork_core::BindingDescriptorError;
use groundwork_core::CapabilityTag;

// ============================================================================
// SECTION: Capability Shape
// ============================================================================

/// Tests capability tags split into service and resource kind.
#[test]
fn test_capability_tag_namespace_split() {
    let tag = CapabilityTag::new("queue:fifo");
    assert!(tag.is_namespaced());
    assert_eq!(tag.service(), Some("queue"));
    assert_eq!(tag.resource_kind(), Some("fifo"));
}

/// Tests unnamespaced and half-empty tags are rejected at construction.
#[test]
fn test_malformed_capability_fails_construction() {
    for capability in ["queue", "queue:", ":fifo"] {
        let result = BindingDescriptor::new("api", "jobs", capability, ["read"]);
        assert_eq!(
            result.unwrap_err(),
            BindingDescriptorError::MalformedCapability {
                capability: capability.to_string(),
            }
        );
    }
}

/// Tests an empty capability is reported as empty, not malformed.
#[test]
fn test_empty_capability_fails_construction() {
    let result = BindingDescriptor::new("api", "jobs", "", ["read"]);
    assert_eq!(result.unwrap_err(), BindingDescriptorError::EmptyCapability);
}

// ============================================================================
// SECTION: Access Vocabulary
// ============================================================================

/// Tests an empty access set is rejected.
#[test]
fn test_empty_access_fails_construction() {
    let access: Vec<&str> = Vec::new();
    let result = BindingDescriptor::new("api", "jobs", "queue:standard", access);
    assert_eq!(result.unwrap_err(), BindingDescriptorError::EmptyAccess);
}

/// Tests every out-of-vocabulary tag is listed in one error.
#[test]
fn test_unknown_access_modes_are_all_reported() {
    let result =
        BindingDescriptor::new("api", "jobs", "queue:standard", ["read", "steal", "borrow"]);
    assert_eq!(
        result.unwrap_err(),
        BindingDescriptorError::UnknownAccessModes {
            modes: vec!["borrow".to_string(), "steal".to_string()],
        }
    );
}

/// Tests a fully in-vocabulary descriptor parses back into typed modes.
#[test]
fn test_access_modes_round_trip() {
    let descriptor =
        BindingDescriptor::new("api", "jobs", "queue:standard", ["read", "write"]).unwrap();
    let modes = descriptor.access_modes().unwrap();
    assert!(modes.contains(&AccessMode::Read));
    assert!(modes.contains(&AccessMode::Write));
    assert_eq!(modes.len(), 2);
    assert!(descriptor.requests(AccessMode::Read));
    assert!(!descriptor.requests(AccessMode::Admin));
}

/// Tests deserialized descriptors fail closed when re-parsing access tags.
#[test]
fn test_deserialized_descriptor_revalidates_access() {
    let raw = serde_json::json!({
        "from": "api",
        "to": "jobs",
        "capability": "queue:standard",
        "access": ["read", "steal"]
    });
    let descriptor: BindingDescriptor = serde_json::from_value(raw).unwrap();
    assert_eq!(
        descriptor.access_modes().unwrap_err(),
        BindingDescriptorError::UnknownAccessModes {
            modes: vec!["steal".to_string()],
        }
    );
}

// ============================================================================
// SECTION: Options
// ============================================================================

/// Tests secure-mode toggles are recognized only as boolean true.
#[test]
fn test_secure_mode_option_flags() {
    let plain =
        BindingDescriptor::new("api", "jobs", "queue:standard", ["read"]).unwrap();
    assert!(!plain.secure_mode_enabled());

    let secure = plain.clone().with_option("require_secure_access", true);
    assert!(secure.secure_mode_enabled());

    let stringly = plain.with_option("require_secure_access", "true");
    assert!(!stringly.secure_mode_enabled());
}

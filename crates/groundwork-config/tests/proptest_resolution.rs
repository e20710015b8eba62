// crates/groundwork-config/tests/proptest_resolution.rs
// ============================================================================
// Module: Resolution Property-Based Tests
// Description: Property tests for resolution idempotence and precedence.
// Purpose: Detect defaulting drift across wide ranges of partial configs.
// ============================================================================

//! Property-based tests for the resolution engine's laws.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use groundwork_config::ComponentCatalog;
use proptest::prelude::*;
use serde_json::Value;
use serde_json::json;

/// Strategy over valid partial scaling objects (any subset of fields).
fn scaling_strategy() -> impl Strategy<Value = Value> {
    (
        prop::option::of(0_u64 .. 5),
        prop::option::of(1_u64 .. 10),
        prop::option::of(0_u64 .. 5),
    )
        .prop_map(|(min, max, desired)| {
            let mut object = serde_json::Map::new();
            if let Some(min) = min {
                object.insert("min".to_string(), json!(min));
            }
            if let Some(max) = max {
                object.insert("max".to_string(), json!(max));
            }
            if let Some(desired) = desired {
                object.insert("desired".to_string(), json!(desired));
            }
            Value::Object(object)
        })
}

/// Strategy over valid partial compute-group configs.
fn partial_config_strategy() -> impl Strategy<Value = Value> {
    (
        prop::option::of("[a-z][a-z0-9]{1,6}\\.(micro|small|large)"),
        prop::option::of(scaling_strategy()),
        prop::option::of(any::<bool>()),
        prop::collection::btree_map("[a-z]{1,5}", "[a-z0-9]{0,8}", 0 .. 4),
    )
        .prop_map(|(instance_type, scaling, encrypted, tags)| {
            let mut object = serde_json::Map::new();
            if let Some(instance_type) = instance_type {
                object.insert("instance_type".to_string(), json!(instance_type));
            }
            if let Some(scaling) = scaling {
                object.insert("scaling".to_string(), scaling);
            }
            if let Some(encrypted) = encrypted {
                object.insert("storage".to_string(), json!({ "encrypted": encrypted }));
            }
            if !tags.is_empty() {
                object.insert("tags".to_string(), json!(tags));
            }
            Value::Object(object)
        })
}

/// Strategy over profile keys, including unrecognized ones.
fn profile_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("baseline".to_string()),
        Just("hardened".to_string()),
        Just("cost-optimized".to_string()),
        "[a-z]{3,10}",
    ]
}

proptest! {
    #[test]
    fn resolution_is_idempotent_for_valid_partials(
        user in partial_config_strategy(),
        profile in profile_strategy(),
    ) {
        let catalog = ComponentCatalog::builtin();
        let entry = catalog.get("compute-group").unwrap();
        let first = entry.resolve(&user, &profile).unwrap();
        let second = entry.resolve(&first.as_partial(), &profile).unwrap();
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn user_leaves_always_win(
        user in partial_config_strategy(),
        profile in profile_strategy(),
    ) {
        let catalog = ComponentCatalog::builtin();
        let entry = catalog.get("compute-group").unwrap();
        let resolved = entry.resolve(&user, &profile).unwrap();
        if let Some(instance_type) = user.get("instance_type") {
            prop_assert_eq!(resolved.pointer("/instance_type"), Some(instance_type));
        }
        if let Some(encrypted) = user.pointer("/storage/encrypted") {
            prop_assert_eq!(resolved.pointer("/storage/encrypted"), Some(encrypted));
        }
    }

    #[test]
    fn nested_siblings_are_always_populated(
        user in partial_config_strategy(),
        profile in profile_strategy(),
    ) {
        let catalog = ComponentCatalog::builtin();
        let entry = catalog.get("compute-group").unwrap();
        let resolved = entry.resolve(&user, &profile).unwrap();
        for pointer in [
            "/scaling/min",
            "/scaling/max",
            "/scaling/desired",
            "/storage/encrypted",
            "/storage/size_gb",
            "/network/subnet_type",
            "/security_groups",
        ] {
            prop_assert!(resolved.pointer(pointer).is_some(), "missing {}", pointer);
        }
    }
}

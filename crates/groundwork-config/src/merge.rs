// crates/groundwork-config/src/merge.rs
// ============================================================================
// Module: Configuration Layer Merge
// Description: Generic recursive deep merge over JSON configuration trees.
// Purpose: Implement the four-layer precedence law in one central place.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! All layer precedence flows through [`deep_merge`]: object fields merge
//! key-by-key recursively while every other value kind (arrays included) is
//! replaced wholesale by the higher-precedence layer. An absent overlay key
//! never erases a base value; an explicitly present `null` does override.
//! `0`, `false`, and the empty string are present values, not absences.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

// ============================================================================
// SECTION: Deep Merge
// ============================================================================

/// Merges `overlay` on top of `base` in place.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        let _ = base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value.clone();
        }
    }
}

/// Folds an ordered slice of layers, lowest precedence first.
#[must_use]
pub fn merge_layers(layers: &[&Value]) -> Value {
    let mut merged = Value::Object(serde_json::Map::new());
    for layer in layers {
        deep_merge(&mut merged, layer);
    }
    merged
}

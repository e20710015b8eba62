// crates/groundwork-config/src/validator.rs
// ============================================================================
// Module: Configuration Schema Validator
// Description: Full-pass structural validation of configs against schemas.
// Purpose: Report every violation at once so authors fix all problems together.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The validator walks a configuration depth-first against the JSON-Schema
//! subset the component catalog emits: `type`, `enum`, `required`,
//! `properties`, `items`, and the `additionalProperties` closure rule
//! (`false` closes an object; a `{"type": "string"}` schema declares an open
//! string-valued map such as free-form tags). Violations are collected over
//! a full pass, never thrown at the first finding, and the input is never
//! mutated. Keywords outside the subset (`minimum`, `minLength`, ...) are
//! documentation for external tooling and are not enforced here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Violations
// ============================================================================

/// One field-level violation found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Dotted path to the violating field (`$` is the document root).
    pub path: String,
    /// The specific rule that was violated.
    pub detail: ViolationDetail,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.detail)
    }
}

/// The specific rule a violation broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationDetail {
    /// The value's runtime type did not match the declared type.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        /// Declared schema type.
        expected: String,
        /// Observed runtime type.
        actual: String,
    },
    /// The value was not a member of the declared enum.
    #[error("value not in allowed set: {}", allowed.join(", "))]
    NotInEnum {
        /// Allowed members, rendered as compact JSON.
        allowed: Vec<String>,
    },
    /// An object carried a key the schema does not declare.
    #[error("unknown key: {key}")]
    UnknownKey {
        /// The undeclared key.
        key: String,
    },
    /// A required key was absent.
    #[error("missing required key: {key}")]
    MissingRequired {
        /// The absent key.
        key: String,
    },
}

/// Validation failure carrying the complete violation list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema validation failed with {} violation(s): {}", violations.len(), render(violations))]
pub struct SchemaValidationError {
    /// Every violation found during the full pass.
    pub violations: Vec<SchemaViolation>,
}

/// Renders violations for the error display.
fn render(violations: &[SchemaViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

// ============================================================================
// SECTION: Validation Entry Point
// ============================================================================

/// Validates a configuration against a schema document.
///
/// # Errors
///
/// Returns [`SchemaValidationError`] carrying every violation found.
pub fn validate(config: &Value, schema: &Value) -> Result<(), SchemaValidationError> {
    let mut violations = Vec::new();
    walk("$", config, schema, &mut violations);
    if violations.is_empty() {
        return Ok(());
    }
    Err(SchemaValidationError {
        violations,
    })
}

// ============================================================================
// SECTION: Recursive Walk
// ============================================================================

/// Walks one config node against its schema node, collecting violations.
fn walk(path: &str, config: &Value, schema: &Value, violations: &mut Vec<SchemaViolation>) {
    if let Some(expected) = schema.get("type").and_then(Value::as_str) {
        if !type_matches(expected, config) {
            violations.push(SchemaViolation {
                path: path.to_string(),
                detail: ViolationDetail::TypeMismatch {
                    expected: expected.to_string(),
                    actual: type_name(config).to_string(),
                },
            });
            return;
        }
    }

    if let Some(allowed) = schema.get("enum").and_then(Value::as_array) {
        if !allowed.contains(config) {
            violations.push(SchemaViolation {
                path: path.to_string(),
                detail: ViolationDetail::NotInEnum {
                    allowed: allowed.iter().map(render_member).collect(),
                },
            });
            return;
        }
    }

    match config {
        Value::Object(entries) => walk_object(path, entries, schema, violations),
        Value::Array(items) => {
            if let Some(item_schema) = schema.get("items") {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{index}]");
                    walk(&item_path, item, item_schema, violations);
                }
            }
        }
        _ => {}
    }
}

/// Walks an object's keys against `properties`, `required`, and closure rules.
fn walk_object(
    path: &str,
    entries: &serde_json::Map<String, Value>,
    schema: &Value,
    violations: &mut Vec<SchemaViolation>,
) {
    let properties = schema.get("properties").and_then(Value::as_object);

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for key in required.iter().filter_map(Value::as_str) {
            if !entries.contains_key(key) {
                violations.push(SchemaViolation {
                    path: path.to_string(),
                    detail: ViolationDetail::MissingRequired {
                        key: key.to_string(),
                    },
                });
            }
        }
    }

    for (key, value) in entries {
        let child_path = format!("{path}.{key}");
        if let Some(child_schema) = properties.and_then(|props| props.get(key)) {
            walk(&child_path, value, child_schema, violations);
            continue;
        }
        match schema.get("additionalProperties") {
            Some(open_schema @ Value::Object(_)) => {
                walk(&child_path, value, open_schema, violations);
            }
            Some(Value::Bool(false)) => violations.push(SchemaViolation {
                path: path.to_string(),
                detail: ViolationDetail::UnknownKey {
                    key: key.clone(),
                },
            }),
            _ => {}
        }
    }
}

// ============================================================================
// SECTION: Type Helpers
// ============================================================================

/// Returns true when the value satisfies the declared schema type.
fn type_matches(expected: &str, value: &Value) -> bool {
    match expected {
        "object" => value.is_object(),
        "array" => value.is_array(),
        "string" => value.is_string(),
        "boolean" => value.is_boolean(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "null" => value.is_null(),
        _ => false,
    }
}

/// Returns the runtime type name of a value for diagnostics.
const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders one enum member as compact JSON for diagnostics.
fn render_member(member: &Value) -> String {
    match member {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

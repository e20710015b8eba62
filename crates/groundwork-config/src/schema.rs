// crates/groundwork-config/src/schema.rs
// ============================================================================
// Module: Component Schemas
// Description: JSON schema builders for built-in component families.
// Purpose: Provide canonical validation schemas, fallbacks, and profiles.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema documents for the built-in component
//! families, together with each family's hardcoded fallback literal and
//! named profile overlays. Schemas close every object with
//! `additionalProperties: false` except the free-form `tags` map, which is
//! declared as an open string-valued map.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;
use serde_json::json;

use crate::catalog::ComponentSchema;
use crate::catalog::PROFILE_COST_OPTIMIZED;
use crate::catalog::PROFILE_HARDENED;

// ============================================================================
// SECTION: Compute Group
// ============================================================================

/// Returns the catalog entry for the compute-group family.
#[must_use]
pub fn compute_group_entry() -> ComponentSchema {
    ComponentSchema::new(
        "compute-group",
        compute_group_schema(),
        compute_group_fallback(),
        compute_group_profiles(),
    )
}

/// Returns the JSON schema for compute-group configurations.
#[must_use]
pub fn compute_group_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "groundwork://schemas/compute-group.schema.json",
        "title": "Compute Group Configuration",
        "description": "Configuration for an autoscaled group of compute instances.",
        "type": "object",
        "properties": {
            "instance_type": {
                "type": "string",
                "minLength": 1,
                "default": "t3.micro",
                "description": "Instance size for group members."
            },
            "scaling": scaling_limits_schema("Scaling limits for the group."),
            "storage": {
                "type": "object",
                "description": "Block storage attached to each member.",
                "default": {},
                "properties": {
                    "encrypted": {
                        "type": "boolean",
                        "default": false,
                        "description": "Encrypt volumes at rest."
                    },
                    "size_gb": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 20,
                        "description": "Volume size in gibibytes."
                    },
                    "volume_type": {
                        "type": "string",
                        "enum": ["standard", "balanced", "provisioned"],
                        "default": "balanced",
                        "description": "Volume performance class."
                    },
                    "retention_days": {
                        "type": "integer",
                        "minimum": 0,
                        "default": 7,
                        "description": "Snapshot retention in days."
                    }
                },
                "additionalProperties": false
            },
            "network": network_placement_schema("Network placement for group members."),
            "security_groups": {
                "type": "array",
                "items": schema_for_non_empty_string("Security group identifier."),
                "default": [],
                "description": "Additional security groups attached to members."
            },
            "tags": tags_schema()
        },
        "additionalProperties": false
    })
}

/// Returns the hardcoded fallback literal for compute groups.
#[must_use]
pub fn compute_group_fallback() -> Value {
    json!({
        "instance_type": "t3.micro",
        "scaling": { "min": 1, "max": 3, "desired": 2 }
    })
}

/// Returns the named profile overlays for compute groups.
#[must_use]
pub fn compute_group_profiles() -> BTreeMap<String, Value> {
    let mut profiles = BTreeMap::new();
    let _ = profiles.insert(
        PROFILE_HARDENED.to_string(),
        json!({
            "storage": { "encrypted": true, "retention_days": 30 },
            "network": { "subnet_type": "PRIVATE", "assign_public_ip": false }
        }),
    );
    let _ = profiles.insert(
        PROFILE_COST_OPTIMIZED.to_string(),
        json!({
            "scaling": { "max": 2, "desired": 1 }
        }),
    );
    profiles
}

// ============================================================================
// SECTION: Message Queue
// ============================================================================

/// Returns the catalog entry for the message-queue family.
#[must_use]
pub fn message_queue_entry() -> ComponentSchema {
    ComponentSchema::new(
        "message-queue",
        message_queue_schema(),
        message_queue_fallback(),
        message_queue_profiles(),
    )
}

/// Returns the JSON schema for message-queue configurations.
#[must_use]
pub fn message_queue_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "groundwork://schemas/message-queue.schema.json",
        "title": "Message Queue Configuration",
        "description": "Configuration for a managed message queue.",
        "type": "object",
        "properties": {
            "queue_type": {
                "type": "string",
                "enum": ["standard", "fifo"],
                "default": "standard",
                "description": "Delivery semantics for the queue."
            },
            "visibility_timeout_seconds": {
                "type": "integer",
                "minimum": 0,
                "default": 30,
                "description": "Seconds a received message stays hidden."
            },
            "message_retention_seconds": {
                "type": "integer",
                "minimum": 60,
                "default": 345_600,
                "description": "Seconds an unconsumed message is retained."
            },
            "encryption": {
                "type": "object",
                "description": "At-rest encryption settings.",
                "default": {},
                "properties": {
                    "enabled": {
                        "type": "boolean",
                        "default": false,
                        "description": "Encrypt messages at rest."
                    },
                    "key_rotation": {
                        "type": "boolean",
                        "default": false,
                        "description": "Rotate the encryption key automatically."
                    }
                },
                "additionalProperties": false
            },
            "dead_letter": {
                "type": "object",
                "description": "Dead-letter redrive settings.",
                "default": {},
                "properties": {
                    "enabled": {
                        "type": "boolean",
                        "default": false,
                        "description": "Route poison messages to a dead-letter queue."
                    },
                    "max_receive_count": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 5,
                        "description": "Receive attempts before redrive."
                    }
                },
                "additionalProperties": false
            },
            "tags": tags_schema()
        },
        "additionalProperties": false
    })
}

/// Returns the hardcoded fallback literal for message queues.
#[must_use]
pub fn message_queue_fallback() -> Value {
    json!({
        "queue_type": "standard",
        "visibility_timeout_seconds": 30
    })
}

/// Returns the named profile overlays for message queues.
#[must_use]
pub fn message_queue_profiles() -> BTreeMap<String, Value> {
    let mut profiles = BTreeMap::new();
    let _ = profiles.insert(
        PROFILE_HARDENED.to_string(),
        json!({
            "encryption": { "enabled": true, "key_rotation": true },
            "dead_letter": { "enabled": true }
        }),
    );
    let _ = profiles.insert(
        PROFILE_COST_OPTIMIZED.to_string(),
        json!({
            "message_retention_seconds": 86_400
        }),
    );
    profiles
}

// ============================================================================
// SECTION: Container Cluster
// ============================================================================

/// Returns the catalog entry for the container-cluster family.
#[must_use]
pub fn container_cluster_entry() -> ComponentSchema {
    ComponentSchema::new(
        "container-cluster",
        container_cluster_schema(),
        container_cluster_fallback(),
        container_cluster_profiles(),
    )
}

/// Returns the JSON schema for container-cluster configurations.
#[must_use]
pub fn container_cluster_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "groundwork://schemas/container-cluster.schema.json",
        "title": "Container Cluster Configuration",
        "description": "Configuration for a managed container cluster.",
        "type": "object",
        "properties": {
            "cluster_tier": {
                "type": "string",
                "enum": ["standard", "dedicated"],
                "default": "standard",
                "description": "Control-plane tenancy tier."
            },
            "container_insights": {
                "type": "boolean",
                "default": false,
                "description": "Enable container-level telemetry collection."
            },
            "capacity": scaling_limits_schema("Capacity limits for cluster workers."),
            "network": network_placement_schema("Network placement for cluster workers."),
            "tags": tags_schema()
        },
        "additionalProperties": false
    })
}

/// Returns the hardcoded fallback literal for container clusters.
#[must_use]
pub fn container_cluster_fallback() -> Value {
    json!({
        "cluster_tier": "standard",
        "capacity": { "min": 1, "max": 3, "desired": 2 }
    })
}

/// Returns the named profile overlays for container clusters.
#[must_use]
pub fn container_cluster_profiles() -> BTreeMap<String, Value> {
    let mut profiles = BTreeMap::new();
    let _ = profiles.insert(
        PROFILE_HARDENED.to_string(),
        json!({
            "container_insights": true,
            "network": { "subnet_type": "ISOLATED" }
        }),
    );
    let _ = profiles.insert(
        PROFILE_COST_OPTIMIZED.to_string(),
        json!({
            "capacity": { "max": 2, "desired": 1 }
        }),
    );
    profiles
}

// ============================================================================
// SECTION: Relational Database
// ============================================================================

/// Returns the catalog entry for the relational-database family.
#[must_use]
pub fn relational_database_entry() -> ComponentSchema {
    ComponentSchema::new(
        "relational-database",
        relational_database_schema(),
        relational_database_fallback(),
        relational_database_profiles(),
    )
}

/// Returns the JSON schema for relational-database configurations.
#[must_use]
pub fn relational_database_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "groundwork://schemas/relational-database.schema.json",
        "title": "Relational Database Configuration",
        "description": "Configuration for a managed relational database.",
        "type": "object",
        "properties": {
            "engine": {
                "type": "string",
                "enum": ["postgres", "mysql", "mariadb"],
                "default": "postgres",
                "description": "Database engine."
            },
            "instance_class": {
                "type": "string",
                "minLength": 1,
                "default": "db.t3.medium",
                "description": "Instance class for the database host."
            },
            "multi_az": {
                "type": "boolean",
                "default": false,
                "description": "Replicate synchronously across availability zones."
            },
            "storage": {
                "type": "object",
                "description": "Database storage settings.",
                "default": {},
                "properties": {
                    "encrypted": {
                        "type": "boolean",
                        "default": false,
                        "description": "Encrypt storage at rest."
                    },
                    "size_gb": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 20,
                        "description": "Allocated storage in gibibytes."
                    },
                    "iops": {
                        "type": "integer",
                        "minimum": 0,
                        "default": 3000,
                        "description": "Provisioned IOPS (0 selects the class default)."
                    }
                },
                "additionalProperties": false
            },
            "backup": {
                "type": "object",
                "description": "Automated backup settings.",
                "default": {},
                "properties": {
                    "retention_days": {
                        "type": "integer",
                        "minimum": 0,
                        "default": 7,
                        "description": "Days automated backups are retained."
                    },
                    "preferred_window": {
                        "type": "string",
                        "default": "03:00-04:00",
                        "description": "Daily backup window (UTC)."
                    }
                },
                "additionalProperties": false
            },
            "tags": tags_schema()
        },
        "additionalProperties": false
    })
}

/// Returns the hardcoded fallback literal for relational databases.
#[must_use]
pub fn relational_database_fallback() -> Value {
    json!({
        "engine": "postgres",
        "instance_class": "db.t3.medium"
    })
}

/// Returns the named profile overlays for relational databases.
#[must_use]
pub fn relational_database_profiles() -> BTreeMap<String, Value> {
    let mut profiles = BTreeMap::new();
    let _ = profiles.insert(
        PROFILE_HARDENED.to_string(),
        json!({
            "multi_az": true,
            "storage": { "encrypted": true },
            "backup": { "retention_days": 35 }
        }),
    );
    let _ = profiles.insert(
        PROFILE_COST_OPTIMIZED.to_string(),
        json!({
            "instance_class": "db.t3.small",
            "multi_az": false
        }),
    );
    profiles
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Schema for min/max/desired scaling limits.
fn scaling_limits_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "default": {},
        "properties": {
            "min": {
                "type": "integer",
                "minimum": 0,
                "default": 1,
                "description": "Minimum running capacity."
            },
            "max": {
                "type": "integer",
                "minimum": 1,
                "default": 3,
                "description": "Maximum running capacity."
            },
            "desired": {
                "type": "integer",
                "minimum": 0,
                "default": 2,
                "description": "Desired steady-state capacity."
            }
        },
        "additionalProperties": false
    })
}

/// Schema for subnet placement and public-address assignment.
fn network_placement_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "description": description,
        "default": {},
        "properties": {
            "subnet_type": {
                "type": "string",
                "enum": ["PUBLIC", "PRIVATE", "ISOLATED"],
                "default": "PRIVATE",
                "description": "Subnet tier the workload is placed in."
            },
            "assign_public_ip": {
                "type": "boolean",
                "default": false,
                "description": "Assign public addresses to workload interfaces."
            }
        },
        "additionalProperties": false
    })
}

/// Schema for the free-form tags map (any string key, string value).
fn tags_schema() -> Value {
    json!({
        "type": "object",
        "description": "Free-form resource tags.",
        "default": {},
        "additionalProperties": { "type": "string" }
    })
}

/// Schema for a required, non-empty string.
fn schema_for_non_empty_string(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": description
    })
}

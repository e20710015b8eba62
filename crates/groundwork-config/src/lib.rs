// crates/groundwork-config/src/lib.rs
// ============================================================================
// Module: Groundwork Config Library
// Description: Component schema catalog and configuration resolution.
// Purpose: Expose layered resolution, validation, and manifest ingestion.
// Dependencies: crate::{catalog, manifest, merge, resolver, schema, validator}
// ============================================================================

//! ## Overview
//! Groundwork config turns a partially-specified component manifest into a
//! fully-resolved, schema-valid configuration. Four default layers merge in
//! precedence order (hardcoded fallback, schema defaults, named profile,
//! user manifest), nested optional substructures are normalized, and the
//! result is validated against the component family's schema with every
//! violation reported at once.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod manifest;
pub mod merge;
pub mod resolver;
pub mod schema;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::ComponentCatalog;
pub use catalog::ComponentSchema;
pub use catalog::PROFILE_BASELINE;
pub use catalog::PROFILE_COST_OPTIMIZED;
pub use catalog::PROFILE_HARDENED;
pub use manifest::ComponentManifest;
pub use manifest::ManifestError;
pub use merge::deep_merge;
pub use merge::merge_layers;
pub use resolver::ConfigurationError;
pub use resolver::ResolvedConfig;
pub use validator::SchemaValidationError;
pub use validator::SchemaViolation;
pub use validator::ViolationDetail;
pub use validator::validate;

// crates/groundwork-config/src/manifest.rs
// ============================================================================
// Module: Component Manifest Ingestion
// Description: Fail-closed TOML loading for component manifests.
// Purpose: Feed user partial configs into resolution with strict limits.
// Dependencies: serde, serde_json, toml
// ============================================================================

//! ## Overview
//! A component manifest names a component family, an optional profile key,
//! and a partial configuration. Loading is fail-closed: oversized files,
//! non-UTF-8 content, overlong paths, and parent-directory traversal are all
//! rejected before parsing. Resolution of the parsed manifest goes through
//! the component catalog so unknown families fail by name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Component;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::ComponentCatalog;
use crate::catalog::PROFILE_BASELINE;
use crate::resolver::ConfigurationError;
use crate::resolver::ResolvedConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum manifest file size in bytes.
pub(crate) const MAX_MANIFEST_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading or resolving a component manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Filesystem access failed.
    #[error("manifest io error: {0}")]
    Io(String),
    /// The manifest content failed to parse as TOML.
    #[error("manifest parse error: {0}")]
    Parse(String),
    /// The manifest violated a structural limit or shape rule.
    #[error("invalid manifest: {0}")]
    Invalid(String),
    /// The manifest named a component family the catalog does not know.
    #[error("unknown component type: {component_type}")]
    UnknownComponentType {
        /// The unrecognized component family identifier.
        component_type: String,
    },
    /// The manifest's partial config failed resolution.
    #[error(transparent)]
    Resolution(#[from] ConfigurationError),
}

// ============================================================================
// SECTION: Component Manifest
// ============================================================================

/// One component instance declaration supplied by a manifest author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentManifest {
    /// Component family identifier (catalog key).
    pub component_type: String,
    /// Profile key selecting the named overlay layer.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Partial configuration merged in at highest precedence.
    #[serde(default = "default_config")]
    pub config: Value,
}

/// Returns the default profile key for manifests that omit one.
fn default_profile() -> String {
    PROFILE_BASELINE.to_string()
}

/// Returns the default empty partial config.
fn default_config() -> Value {
    Value::Object(serde_json::Map::new())
}

impl ComponentManifest {
    /// Loads a manifest from disk using the fail-closed limits.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when the path violates limits, the file
    /// cannot be read, or the content fails to parse.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        validate_path(path)?;
        let bytes = fs::read(path).map_err(|err| ManifestError::Io(err.to_string()))?;
        if bytes.len() > MAX_MANIFEST_FILE_SIZE {
            return Err(ManifestError::Invalid("manifest file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ManifestError::Invalid("manifest file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses a manifest from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when parsing fails or the component type
    /// is empty.
    pub fn from_toml_str(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            toml::from_str(content).map_err(|err| ManifestError::Parse(err.to_string()))?;
        if manifest.component_type.is_empty() {
            return Err(ManifestError::Invalid("component_type must not be empty".to_string()));
        }
        Ok(manifest)
    }

    /// Resolves the manifest's partial config through the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when the component family is unknown or
    /// resolution fails validation.
    pub fn resolve_with(&self, catalog: &ComponentCatalog) -> Result<ResolvedConfig, ManifestError> {
        let entry = catalog.get(&self.component_type).ok_or_else(|| {
            ManifestError::UnknownComponentType {
                component_type: self.component_type.clone(),
            }
        })?;
        Ok(entry.resolve(&self.config, &self.profile)?)
    }
}

// ============================================================================
// SECTION: Path Validation
// ============================================================================

/// Validates a manifest path against traversal and length limits.
fn validate_path(path: &Path) -> Result<(), ManifestError> {
    let rendered = path.to_string_lossy();
    if rendered.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ManifestError::Invalid("manifest path exceeds length limit".to_string()));
    }
    for component in path.components() {
        match component {
            Component::ParentDir => {
                return Err(ManifestError::Invalid(
                    "manifest path must not traverse parent directories".to_string(),
                ));
            }
            Component::Normal(part) => {
                if part.to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH {
                    return Err(ManifestError::Invalid(
                        "manifest path component exceeds length limit".to_string(),
                    ));
                }
            }
            _ => {}
        }
    }
    Ok(())
}

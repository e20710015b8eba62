// crates/groundwork-core/src/core/access.rs
// ============================================================================
// Module: Groundwork Access Vocabulary
// Description: Closed vocabulary of access modes requested by bindings.
// Purpose: Provide the fixed set of access tags binder strategies key off.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Access modes describe what a source component is allowed to do against a
//! bound target. The vocabulary is closed: descriptors carry raw string tags
//! and both descriptor construction and strategy pre-checks reject anything
//! outside this set. Modes a strategy has no meaning for contribute nothing
//! rather than erroring.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Access Modes
// ============================================================================

/// Access mode requested by a binding descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Read target state or consume its data.
    Read,
    /// Write data into the target.
    Write,
    /// Administer the target (configuration-level operations).
    Admin,
    /// Encrypt payloads with the target's key material.
    Encrypt,
    /// Decrypt payloads with the target's key material.
    Decrypt,
    /// Manage or trigger backups of the target.
    Backup,
    /// Process records or messages delivered by the target.
    Process,
    /// Execute workloads on the target.
    Execute,
    /// Poll the target for pending work.
    Poll,
    /// Send messages into the target.
    Send,
    /// Invoke or start executions on the target.
    Invoke,
    /// Publish to the target's distribution surface.
    Publish,
    /// Subscribe to the target's notifications.
    Subscribe,
    /// Read or update the target's shadow/replica state.
    Shadow,
    /// Manage the target's resource policies.
    Policy,
}

impl AccessMode {
    /// Returns every vocabulary member in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Read,
            Self::Write,
            Self::Admin,
            Self::Encrypt,
            Self::Decrypt,
            Self::Backup,
            Self::Process,
            Self::Execute,
            Self::Poll,
            Self::Send,
            Self::Invoke,
            Self::Publish,
            Self::Subscribe,
            Self::Shadow,
            Self::Policy,
        ]
    }

    /// Returns the stable string form of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Admin => "admin",
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
            Self::Backup => "backup",
            Self::Process => "process",
            Self::Execute => "execute",
            Self::Poll => "poll",
            Self::Send => "send",
            Self::Invoke => "invoke",
            Self::Publish => "publish",
            Self::Subscribe => "subscribe",
            Self::Shadow => "shadow",
            Self::Policy => "policy",
        }
    }

    /// Parses a raw tag into a vocabulary member.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|mode| mode.as_str() == tag)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

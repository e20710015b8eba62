// crates/groundwork-binders/src/registry.rs
// ============================================================================
// Module: Capability Binding Registry
// Description: Registry routing binding descriptors to binder strategies.
// Purpose: Dispatch bindings by service type with enumeration and advice.
// Dependencies: groundwork-core, serde
// ============================================================================

//! ## Overview
//! The binding registry maps target-service identifiers to binder
//! strategies. Registration is last-wins: a later strategy replaces any
//! prior one for the same service type. The registry itself implements
//! [`BinderStrategy`], dispatching on the capability tag's namespace prefix,
//! so a whole synthesis pass can treat it as one composite binder.
//! Category listings and binding recommendations are reporting surfaces
//! only; `bind` never consults them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use groundwork_core::BindContext;
use groundwork_core::BindError;
use groundwork_core::BinderStrategy;
use groundwork_core::BindingDescriptor;
use groundwork_core::BindingDescriptorError;
use groundwork_core::CapabilityTag;
use groundwork_core::ServiceType;
use groundwork_core::SourceComponent;
use groundwork_core::TargetAttributes;
use groundwork_core::UnsupportedCapabilityError;
use serde::Deserialize;
use serde::Serialize;

use crate::cdn::ContentDeliveryBinder;
use crate::cluster::ClusterBinder;
use crate::keys::KeyBinder;
use crate::network::NetworkBinder;
use crate::queue::QueueBinder;
use crate::secrets::SecretBinder;
use crate::workflow::WorkflowBinder;

// ============================================================================
// SECTION: Service Categories
// ============================================================================

/// Reporting category for a target-service family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    /// Compute and workload-hosting services.
    Compute,
    /// Content-delivery and edge services.
    ContentDelivery,
    /// Messaging and queueing services.
    Messaging,
    /// Network placement services.
    Networking,
    /// Workflow-orchestration services.
    Orchestration,
    /// Key-management and secret-store services.
    Security,
    /// Services registered at runtime without a known category.
    Other,
}

// ============================================================================
// SECTION: Binding Registry
// ============================================================================

/// Registry of binder strategies keyed by service type.
///
/// # Invariants
/// - Registration replaces any prior strategy for the same service type.
/// - `capabilities` always equals the union of every registered strategy's
///   supported set.
pub struct BindingRegistry {
    /// Strategy implementations keyed by service-type identifier.
    strategies: BTreeMap<ServiceType, Box<dyn BinderStrategy + Send + Sync>>,
    /// Cached union of every registered strategy's capabilities.
    capabilities: BTreeSet<CapabilityTag>,
}

impl BindingRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: BTreeMap::new(),
            capabilities: BTreeSet::new(),
        }
    }

    /// Creates a registry with every built-in binder registered.
    #[must_use]
    pub fn with_builtin_binders() -> Self {
        let mut registry = Self::new();
        registry.register(QueueBinder::SERVICE_TYPE, QueueBinder::new());
        registry.register(ClusterBinder::SERVICE_TYPE, ClusterBinder::new());
        registry.register(KeyBinder::SERVICE_TYPE, KeyBinder::new());
        registry.register(WorkflowBinder::SERVICE_TYPE, WorkflowBinder::new());
        registry.register(SecretBinder::SERVICE_TYPE, SecretBinder::new());
        registry.register(ContentDeliveryBinder::SERVICE_TYPE, ContentDeliveryBinder::new());
        registry.register(NetworkBinder::SERVICE_TYPE, NetworkBinder::new());
        registry
    }

    /// Registers a strategy, replacing any prior entry for the service type.
    pub fn register(
        &mut self,
        service_type: impl Into<ServiceType>,
        strategy: impl BinderStrategy + Send + Sync + 'static,
    ) {
        let _ = self.strategies.insert(service_type.into(), Box::new(strategy));
        self.rebuild_capability_union();
    }

    /// Returns the strategy for a service type, if registered.
    #[must_use]
    pub fn get(&self, service_type: &ServiceType) -> Option<&(dyn BinderStrategy + Send + Sync)> {
        self.strategies.get(service_type).map(AsRef::as_ref)
    }

    /// Returns a service type's supported capabilities in sorted order.
    ///
    /// Unregistered service types yield an empty list, not an error.
    #[must_use]
    pub fn supported_capabilities(&self, service_type: &ServiceType) -> Vec<String> {
        self.strategies.get(service_type).map_or_else(Vec::new, |strategy| {
            strategy
                .supported_capabilities()
                .iter()
                .map(|capability| capability.as_str().to_string())
                .collect()
        })
    }

    /// Returns true when the type is registered and supports the capability.
    #[must_use]
    pub fn validate_binding(&self, service_type: &ServiceType, capability: &str) -> bool {
        self.strategies.get(service_type).is_some_and(|strategy| {
            strategy.supported_capabilities().contains(&CapabilityTag::new(capability))
        })
    }

    /// Returns every registered service type in sorted order.
    #[must_use]
    pub fn service_types(&self) -> Vec<ServiceType> {
        self.strategies.keys().cloned().collect()
    }

    /// Groups registered service types by reporting category.
    #[must_use]
    pub fn services_by_category(&self) -> BTreeMap<ServiceCategory, Vec<ServiceType>> {
        let mut grouped: BTreeMap<ServiceCategory, Vec<ServiceType>> = BTreeMap::new();
        for service_type in self.strategies.keys() {
            grouped.entry(category_of(service_type)).or_default().push(service_type.clone());
        }
        grouped
    }

    /// Returns static advisory guidance for a service type.
    ///
    /// Recommendations are descriptive output for tooling and documentation;
    /// `bind` never consults them. Unregistered types yield an empty list.
    #[must_use]
    pub fn binding_recommendations(&self, service_type: &ServiceType) -> Vec<String> {
        if !self.strategies.contains_key(service_type) {
            return Vec::new();
        }
        recommendations_for(service_type)
    }

    /// Rebuilds the cached capability union after a registration.
    fn rebuild_capability_union(&mut self) {
        self.capabilities = self
            .strategies
            .values()
            .flat_map(|strategy| strategy.supported_capabilities().iter().cloned())
            .collect();
    }
}

impl Default for BindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BinderStrategy for BindingRegistry {
    fn supported_capabilities(&self) -> &BTreeSet<CapabilityTag> {
        &self.capabilities
    }

    fn bind(
        &self,
        source: &mut SourceComponent,
        target: &TargetAttributes,
        descriptor: &BindingDescriptor,
        ctx: &BindContext,
    ) -> Result<(), BindError> {
        let Some(service) = descriptor.capability.service() else {
            return Err(BindingDescriptorError::MalformedCapability {
                capability: descriptor.capability.as_str().to_string(),
            }
            .into());
        };
        let Some(strategy) = self.strategies.get(&ServiceType::new(service)) else {
            return Err(UnsupportedCapabilityError {
                capability: descriptor.capability.clone(),
                supported: self
                    .capabilities
                    .iter()
                    .map(|capability| capability.as_str().to_string())
                    .collect(),
            }
            .into());
        };
        strategy.bind(source, target, descriptor, ctx)
    }
}

// ============================================================================
// SECTION: Category And Advice Tables
// ============================================================================

/// Returns the reporting category for a service type.
fn category_of(service_type: &ServiceType) -> ServiceCategory {
    match service_type.as_str() {
        "cluster" => ServiceCategory::Compute,
        "cdn" => ServiceCategory::ContentDelivery,
        "queue" => ServiceCategory::Messaging,
        "network" => ServiceCategory::Networking,
        "workflow" => ServiceCategory::Orchestration,
        "keys" | "secrets" => ServiceCategory::Security,
        _ => ServiceCategory::Other,
    }
}

/// Returns the static advisory strings for a known service type.
fn recommendations_for(service_type: &ServiceType) -> Vec<String> {
    let advice: &[&str] = match service_type.as_str() {
        "queue" => &[
            "Prefer the process mode over read for consumers that delete messages.",
            "Enable require_secure_access when messages carry regulated data.",
            "Pair fifo queues with dead-letter redrive to contain poison messages.",
        ],
        "cluster" => &[
            "Grant execute only to operators that run one-off tasks.",
            "Keep admin off application bindings; reserve it for deployment roles.",
        ],
        "keys" => &[
            "Request encrypt and decrypt separately so producers cannot read.",
            "Use keys:signing for verification workloads instead of shared secrets.",
        ],
        "workflow" => &[
            "Prefer invoke over execute unless the caller must stop executions.",
            "Express workflows support synchronous invocation for request paths.",
        ],
        "secrets" => &[
            "Bind read-only; rotation belongs to a dedicated operator component.",
            "Enable require_secure_access to surface the audit-logging contract.",
        ],
        "cdn" => &[
            "Publishers need write for invalidations; admin is for distribution changes.",
        ],
        "network" => &[
            "Network bindings are placement contracts; grant read only when the source introspects topology.",
        ],
        _ => &[],
    };
    advice.iter().map(ToString::to_string).collect()
}

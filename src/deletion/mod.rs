//! Deletion management module.
//!
//! Before a metadata object is deleted, the owning service dispatches a
//! [`DeletionEvent`] through the [`DeletionRegistry`]. Registered listeners
//! check for dependent records and may veto the deletion; the first veto
//! aborts dispatch and propagates to the caller as the refusal reason. The
//! registry never deletes anything itself.

mod deletion_errors;
mod deletion_model;
mod deletion_registry;
mod deletion_traits;

pub use deletion_errors::VetoReason;
pub use deletion_model::{DeletionCandidate, DeletionEvent, ObjectKind};
pub use deletion_registry::DeletionRegistry;
pub use deletion_traits::{DeletionListener, ListenerResult};

use std::sync::Arc;

use crate::indicators::{IndicatorDeletionHandler, IndicatorRepositoryTrait};
use crate::org_units::{OrganisationUnitDeletionHandler, OrganisationUnitRepositoryTrait};
use crate::relationships::{RelationshipDeletionHandler, RelationshipRepositoryTrait};

/// Builds a registry with the standard deletion handlers registered, in a
/// fixed order: indicators, relationships, organisation units.
///
/// This is the startup-registration entry point; embedders with custom
/// listeners can register them on the returned registry afterwards.
pub fn standard_registry(
    indicators: Arc<dyn IndicatorRepositoryTrait>,
    relationships: Arc<dyn RelationshipRepositoryTrait>,
    org_units: Arc<dyn OrganisationUnitRepositoryTrait>,
) -> DeletionRegistry {
    let registry = DeletionRegistry::new();
    registry.register(Arc::new(IndicatorDeletionHandler::new(indicators)));
    registry.register(Arc::new(RelationshipDeletionHandler::new(relationships)));
    registry.register(Arc::new(OrganisationUnitDeletionHandler::new(org_units)));
    registry
}

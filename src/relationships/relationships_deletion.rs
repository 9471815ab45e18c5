//! Deletion handler guarding relationship types.

use std::sync::Arc;

use log::warn;

use crate::deletion::{
    DeletionCandidate, DeletionEvent, DeletionListener, ListenerResult, ObjectKind, VetoReason,
};

use super::RelationshipRepositoryTrait;

/// Vetoes deletion of a relationship type while relationships of that type
/// still exist.
pub struct RelationshipDeletionHandler {
    relationships: Arc<dyn RelationshipRepositoryTrait>,
}

impl RelationshipDeletionHandler {
    pub fn new(relationships: Arc<dyn RelationshipRepositoryTrait>) -> Self {
        Self { relationships }
    }
}

impl DeletionListener for RelationshipDeletionHandler {
    fn name(&self) -> &str {
        "RelationshipDeletionHandler"
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::RelationshipType
    }

    fn on_deletion_requested(&self, event: &DeletionEvent) -> ListenerResult {
        let DeletionCandidate::RelationshipType(relationship_type) = event.candidate() else {
            return Ok(());
        };

        let referencing = match self
            .relationships
            .get_relationships_by_type(&relationship_type.id)
        {
            Ok(relationships) => relationships.len(),
            Err(err) => {
                // References that cannot be verified are treated as present.
                warn!(
                    "Failed to look up relationships for type {}: {}",
                    relationship_type.id, err
                );
                return Err(VetoReason::new(
                    self.name(),
                    ObjectKind::RelationshipType,
                    &relationship_type.name,
                    "its references could not be verified",
                ));
            }
        };

        if referencing > 0 {
            return Err(VetoReason::new(
                self.name(),
                ObjectKind::RelationshipType,
                &relationship_type.name,
                format!(
                    "it is still referenced by {} relationship{}",
                    referencing,
                    if referencing == 1 { "" } else { "s" }
                ),
            ));
        }

        Ok(())
    }
}

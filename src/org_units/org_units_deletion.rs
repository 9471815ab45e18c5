//! Deletion handler guarding the organisation unit hierarchy.

use std::sync::Arc;

use log::warn;

use crate::deletion::{
    DeletionCandidate, DeletionEvent, DeletionListener, ListenerResult, ObjectKind, VetoReason,
};

use super::OrganisationUnitRepositoryTrait;

/// Vetoes deletion of an organisation unit while it still has child units.
pub struct OrganisationUnitDeletionHandler {
    org_units: Arc<dyn OrganisationUnitRepositoryTrait>,
}

impl OrganisationUnitDeletionHandler {
    pub fn new(org_units: Arc<dyn OrganisationUnitRepositoryTrait>) -> Self {
        Self { org_units }
    }
}

impl DeletionListener for OrganisationUnitDeletionHandler {
    fn name(&self) -> &str {
        "OrganisationUnitDeletionHandler"
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::OrganisationUnit
    }

    fn on_deletion_requested(&self, event: &DeletionEvent) -> ListenerResult {
        let DeletionCandidate::OrganisationUnit(unit) = event.candidate() else {
            return Ok(());
        };

        let children = match self.org_units.get_children(&unit.id) {
            Ok(children) => children.len(),
            Err(err) => {
                warn!("Failed to look up children of unit {}: {}", unit.id, err);
                return Err(VetoReason::new(
                    self.name(),
                    ObjectKind::OrganisationUnit,
                    &unit.name,
                    "its child units could not be verified",
                ));
            }
        };

        if children > 0 {
            return Err(VetoReason::new(
                self.name(),
                ObjectKind::OrganisationUnit,
                &unit.name,
                format!(
                    "it still has {} child unit{}",
                    children,
                    if children == 1 { "" } else { "s" }
                ),
            ));
        }

        Ok(())
    }
}

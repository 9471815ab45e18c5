//! Organisation unit service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::deletion::{DeletionEvent, DeletionRegistry};
use crate::errors::ValidationError;
use crate::Result;

use super::{
    NewOrganisationUnit, OrganisationUnit, OrganisationUnitRepositoryTrait,
    OrganisationUnitServiceTrait,
};

pub struct OrganisationUnitService {
    repository: Arc<dyn OrganisationUnitRepositoryTrait>,
    deletion_registry: Arc<DeletionRegistry>,
}

impl OrganisationUnitService {
    pub fn new(
        repository: Arc<dyn OrganisationUnitRepositoryTrait>,
        deletion_registry: Arc<DeletionRegistry>,
    ) -> Self {
        Self {
            repository,
            deletion_registry,
        }
    }
}

#[async_trait]
impl OrganisationUnitServiceTrait for OrganisationUnitService {
    fn get_organisation_unit(&self, id: &str) -> Result<OrganisationUnit> {
        self.repository.get_organisation_unit(id)
    }

    fn list_organisation_units(&self) -> Result<Vec<OrganisationUnit>> {
        self.repository.list_organisation_units()
    }

    async fn create_organisation_unit(
        &self,
        new: NewOrganisationUnit,
    ) -> Result<OrganisationUnit> {
        if new.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        // Level derives from the parent; roots are level 1.
        let level = match &new.parent_id {
            Some(parent_id) => self.repository.get_organisation_unit(parent_id)?.level + 1,
            None => 1,
        };

        let now = Utc::now().naive_utc();
        let unit = OrganisationUnit {
            id: new.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new.name,
            parent_id: new.parent_id,
            level,
            created_at: now,
            updated_at: now,
        };
        self.repository.create_organisation_unit(unit).await
    }

    async fn delete_organisation_unit(&self, id: &str) -> Result<()> {
        let unit = self.repository.get_organisation_unit(id)?;
        debug!("Requesting deletion of organisation unit {id}");

        let event = DeletionEvent::new(unit);
        self.deletion_registry.dispatch(&event)?;

        self.repository.delete_organisation_unit(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org_units::{InMemoryOrganisationUnitRepository, OrganisationUnitDeletionHandler};
    use crate::Error;

    fn service() -> OrganisationUnitService {
        let repository = Arc::new(InMemoryOrganisationUnitRepository::new());

        let registry = DeletionRegistry::new();
        registry.register(Arc::new(OrganisationUnitDeletionHandler::new(
            repository.clone(),
        )));

        OrganisationUnitService::new(repository, Arc::new(registry))
    }

    fn new_unit(name: &str, parent_id: Option<&str>) -> NewOrganisationUnit {
        NewOrganisationUnit {
            id: None,
            name: name.to_string(),
            parent_id: parent_id.map(|p| p.to_string()),
        }
    }

    #[tokio::test]
    async fn test_levels_follow_the_hierarchy() {
        let service = service();
        let country = service
            .create_organisation_unit(new_unit("Norway", None))
            .await
            .unwrap();
        let district = service
            .create_organisation_unit(new_unit("Oslo", Some(&country.id)))
            .await
            .unwrap();

        assert_eq!(country.level, 1);
        assert_eq!(district.level, 2);
    }

    #[tokio::test]
    async fn test_create_with_unknown_parent_fails() {
        let service = service();
        assert!(matches!(
            service
                .create_organisation_unit(new_unit("Orphan", Some("missing")))
                .await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_vetoed_while_children_exist() {
        let service = service();
        let country = service
            .create_organisation_unit(new_unit("Norway", None))
            .await
            .unwrap();
        service
            .create_organisation_unit(new_unit("Oslo", Some(&country.id)))
            .await
            .unwrap();

        let err = service
            .delete_organisation_unit(&country.id)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Vetoed(_)));
        assert!(service.get_organisation_unit(&country.id).is_ok());
    }

    #[tokio::test]
    async fn test_delete_leaf_allowed() {
        let service = service();
        let country = service
            .create_organisation_unit(new_unit("Norway", None))
            .await
            .unwrap();
        let district = service
            .create_organisation_unit(new_unit("Oslo", Some(&country.id)))
            .await
            .unwrap();

        service
            .delete_organisation_unit(&district.id)
            .await
            .unwrap();
        // With the leaf gone the parent can follow.
        service.delete_organisation_unit(&country.id).await.unwrap();
    }
}

//! Relationship type service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::deletion::{DeletionEvent, DeletionRegistry};
use crate::errors::ValidationError;
use crate::Result;

use super::{
    NewRelationshipType, RelationshipType, RelationshipTypeRepositoryTrait,
    RelationshipTypeServiceTrait, RelationshipTypeUpdate,
};

pub struct RelationshipTypeService {
    repository: Arc<dyn RelationshipTypeRepositoryTrait>,
    deletion_registry: Arc<DeletionRegistry>,
}

impl RelationshipTypeService {
    pub fn new(
        repository: Arc<dyn RelationshipTypeRepositoryTrait>,
        deletion_registry: Arc<DeletionRegistry>,
    ) -> Self {
        Self {
            repository,
            deletion_registry,
        }
    }

    fn validate_name(&self, name: &str, current_id: Option<&str>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let duplicate = self
            .repository
            .list_relationship_types()?
            .into_iter()
            .any(|rt| rt.name == name && Some(rt.id.as_str()) != current_id);
        if duplicate {
            return Err(ValidationError::InvalidInput(format!(
                "A relationship type named '{name}' already exists"
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl RelationshipTypeServiceTrait for RelationshipTypeService {
    fn get_relationship_type(&self, id: &str) -> Result<RelationshipType> {
        self.repository.get_relationship_type(id)
    }

    fn list_relationship_types(&self) -> Result<Vec<RelationshipType>> {
        self.repository.list_relationship_types()
    }

    async fn create_relationship_type(&self, new: NewRelationshipType) -> Result<RelationshipType> {
        self.validate_name(&new.name, None)?;
        self.repository.create_relationship_type(new).await
    }

    async fn update_relationship_type(
        &self,
        update: RelationshipTypeUpdate,
    ) -> Result<RelationshipType> {
        self.validate_name(&update.name, Some(&update.id))?;
        self.repository.update_relationship_type(update).await
    }

    async fn delete_relationship_type(&self, id: &str) -> Result<()> {
        let relationship_type = self.repository.get_relationship_type(id)?;
        debug!("Requesting deletion of relationship type {id}");

        let event = DeletionEvent::new(relationship_type);
        self.deletion_registry.dispatch(&event)?;

        self.repository.delete_relationship_type(id).await?;
        Ok(())
    }
}

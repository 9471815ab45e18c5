//! In-memory repositories for relationship types and relationships.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::{Error, Result};

use super::{
    NewRelationship, NewRelationshipType, Relationship, RelationshipType,
    RelationshipTypeRepositoryTrait, RelationshipTypeUpdate, RelationshipRepositoryTrait,
};

/// In-memory relationship type store, suitable for tests and embedders
/// without their own storage.
#[derive(Default)]
pub struct InMemoryRelationshipTypeRepository {
    types: DashMap<String, RelationshipType>,
}

impl InMemoryRelationshipTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RelationshipTypeRepositoryTrait for InMemoryRelationshipTypeRepository {
    fn get_relationship_type(&self, id: &str) -> Result<RelationshipType> {
        self.types
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Relationship type {id}")))
    }

    fn list_relationship_types(&self) -> Result<Vec<RelationshipType>> {
        let mut types: Vec<RelationshipType> =
            self.types.iter().map(|entry| entry.value().clone()).collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn create_relationship_type(&self, new: NewRelationshipType) -> Result<RelationshipType> {
        let id = new.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.types.contains_key(&id) {
            return Err(Error::Repository(format!(
                "Relationship type {id} already exists"
            )));
        }
        let now = Utc::now().naive_utc();
        let relationship_type = RelationshipType {
            id: id.clone(),
            name: new.name,
            bidirectional: new.bidirectional,
            created_at: now,
            updated_at: now,
        };
        self.types.insert(id, relationship_type.clone());
        Ok(relationship_type)
    }

    async fn update_relationship_type(
        &self,
        update: RelationshipTypeUpdate,
    ) -> Result<RelationshipType> {
        let mut entry = self
            .types
            .get_mut(&update.id)
            .ok_or_else(|| Error::NotFound(format!("Relationship type {}", update.id)))?;
        entry.name = update.name;
        entry.bidirectional = update.bidirectional;
        entry.updated_at = Utc::now().naive_utc();
        Ok(entry.value().clone())
    }

    async fn delete_relationship_type(&self, id: &str) -> Result<usize> {
        Ok(self.types.remove(id).map(|_| 1).unwrap_or(0))
    }
}

/// In-memory relationship store.
#[derive(Default)]
pub struct InMemoryRelationshipRepository {
    relationships: DashMap<String, Relationship>,
}

impl InMemoryRelationshipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RelationshipRepositoryTrait for InMemoryRelationshipRepository {
    fn get_relationship(&self, id: &str) -> Result<Relationship> {
        self.relationships
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Relationship {id}")))
    }

    fn list_relationships(&self) -> Result<Vec<Relationship>> {
        let mut relationships: Vec<Relationship> =
            self.relationships.iter().map(|entry| entry.value().clone()).collect();
        relationships.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(relationships)
    }

    fn get_relationships_by_type(&self, relationship_type_id: &str) -> Result<Vec<Relationship>> {
        Ok(self
            .relationships
            .iter()
            .filter(|entry| entry.relationship_type_id == relationship_type_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn create_relationship(&self, new: NewRelationship) -> Result<Relationship> {
        let id = new.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.relationships.contains_key(&id) {
            return Err(Error::Repository(format!("Relationship {id} already exists")));
        }
        let relationship = Relationship {
            id: id.clone(),
            relationship_type_id: new.relationship_type_id,
            from_entity: new.from_entity,
            to_entity: new.to_entity,
            created_at: Utc::now().naive_utc(),
        };
        self.relationships.insert(id, relationship.clone());
        Ok(relationship)
    }

    async fn delete_relationship(&self, id: &str) -> Result<usize> {
        Ok(self.relationships.remove(id).map(|_| 1).unwrap_or(0))
    }
}

//! Traits for relationship repositories and services.

use async_trait::async_trait;

use crate::Result;

use super::{
    NewRelationship, NewRelationshipType, Relationship, RelationshipType, RelationshipTypeUpdate,
};

/// Repository trait for relationship type persistence operations.
#[async_trait]
pub trait RelationshipTypeRepositoryTrait: Send + Sync {
    fn get_relationship_type(&self, id: &str) -> Result<RelationshipType>;
    fn list_relationship_types(&self) -> Result<Vec<RelationshipType>>;
    async fn create_relationship_type(&self, new: NewRelationshipType) -> Result<RelationshipType>;
    async fn update_relationship_type(
        &self,
        update: RelationshipTypeUpdate,
    ) -> Result<RelationshipType>;
    async fn delete_relationship_type(&self, id: &str) -> Result<usize>;
}

/// Repository trait for relationship persistence operations.
#[async_trait]
pub trait RelationshipRepositoryTrait: Send + Sync {
    fn get_relationship(&self, id: &str) -> Result<Relationship>;
    fn list_relationships(&self) -> Result<Vec<Relationship>>;
    fn get_relationships_by_type(&self, relationship_type_id: &str) -> Result<Vec<Relationship>>;
    async fn create_relationship(&self, new: NewRelationship) -> Result<Relationship>;
    async fn delete_relationship(&self, id: &str) -> Result<usize>;
}

/// Service trait for relationship type business logic.
#[async_trait]
pub trait RelationshipTypeServiceTrait: Send + Sync {
    fn get_relationship_type(&self, id: &str) -> Result<RelationshipType>;
    fn list_relationship_types(&self) -> Result<Vec<RelationshipType>>;
    async fn create_relationship_type(&self, new: NewRelationshipType) -> Result<RelationshipType>;
    async fn update_relationship_type(
        &self,
        update: RelationshipTypeUpdate,
    ) -> Result<RelationshipType>;
    /// Deletes a relationship type after consulting the deletion registry.
    async fn delete_relationship_type(&self, id: &str) -> Result<()>;
}

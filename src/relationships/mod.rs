//! Relationships module - domain models, services, and traits.
//!
//! Relationship types classify how tracked entities relate; relationships
//! are the concrete links. Deleting a relationship type is guarded by
//! [`RelationshipDeletionHandler`].

mod relationships_deletion;
mod relationships_model;
mod relationships_repository;
mod relationships_service;
mod relationships_traits;

pub use relationships_deletion::RelationshipDeletionHandler;
pub use relationships_model::{
    NewRelationship, NewRelationshipType, Relationship, RelationshipType, RelationshipTypeUpdate,
};
pub use relationships_repository::{
    InMemoryRelationshipRepository, InMemoryRelationshipTypeRepository,
};
pub use relationships_service::RelationshipTypeService;
pub use relationships_traits::{
    RelationshipRepositoryTrait, RelationshipTypeRepositoryTrait, RelationshipTypeServiceTrait,
};

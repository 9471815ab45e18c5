//! Domain models for relationship types and relationships.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A relationship type defines how two tracked entities relate
/// (e.g. "Sibling", "Mother-child").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipType {
    pub id: String,
    pub name: String,
    /// true = the relationship reads the same from both sides
    pub bidirectional: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data for creating a new relationship type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelationshipType {
    pub id: Option<String>,
    pub name: String,
    pub bidirectional: bool,
}

/// Data for updating an existing relationship type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipTypeUpdate {
    pub id: String,
    pub name: String,
    pub bidirectional: bool,
}

/// A concrete relationship between two tracked entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub relationship_type_id: String,
    pub from_entity: String,
    pub to_entity: String,
    pub created_at: NaiveDateTime,
}

/// Data for creating a new relationship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelationship {
    pub id: Option<String>,
    pub relationship_type_id: String,
    pub from_entity: String,
    pub to_entity: String,
}

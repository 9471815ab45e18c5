//! Traits for organisation unit repositories and services.

use async_trait::async_trait;

use crate::Result;

use super::{NewOrganisationUnit, OrganisationUnit};

/// Repository trait for organisation unit persistence operations.
#[async_trait]
pub trait OrganisationUnitRepositoryTrait: Send + Sync {
    fn get_organisation_unit(&self, id: &str) -> Result<OrganisationUnit>;
    fn list_organisation_units(&self) -> Result<Vec<OrganisationUnit>>;
    fn get_children(&self, parent_id: &str) -> Result<Vec<OrganisationUnit>>;
    async fn create_organisation_unit(&self, unit: OrganisationUnit) -> Result<OrganisationUnit>;
    async fn delete_organisation_unit(&self, id: &str) -> Result<usize>;
}

/// Service trait for organisation unit business logic.
#[async_trait]
pub trait OrganisationUnitServiceTrait: Send + Sync {
    fn get_organisation_unit(&self, id: &str) -> Result<OrganisationUnit>;
    fn list_organisation_units(&self) -> Result<Vec<OrganisationUnit>>;
    async fn create_organisation_unit(&self, new: NewOrganisationUnit)
        -> Result<OrganisationUnit>;
    /// Deletes an organisation unit after consulting the deletion registry.
    async fn delete_organisation_unit(&self, id: &str) -> Result<()>;
}

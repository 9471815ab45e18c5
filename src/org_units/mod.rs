//! Organisation units module - domain models, services, and traits.
//!
//! Organisation units form the reporting hierarchy. Deleting a unit that
//! still has children is guarded by [`OrganisationUnitDeletionHandler`].

mod org_units_deletion;
mod org_units_model;
mod org_units_repository;
mod org_units_service;
mod org_units_traits;

pub use org_units_deletion::OrganisationUnitDeletionHandler;
pub use org_units_model::{NewOrganisationUnit, OrganisationUnit};
pub use org_units_repository::InMemoryOrganisationUnitRepository;
pub use org_units_service::OrganisationUnitService;
pub use org_units_traits::{OrganisationUnitRepositoryTrait, OrganisationUnitServiceTrait};

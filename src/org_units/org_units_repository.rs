//! In-memory repository for organisation units.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::{Error, Result};

use super::{OrganisationUnit, OrganisationUnitRepositoryTrait};

/// In-memory organisation unit store.
#[derive(Default)]
pub struct InMemoryOrganisationUnitRepository {
    units: DashMap<String, OrganisationUnit>,
}

impl InMemoryOrganisationUnitRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrganisationUnitRepositoryTrait for InMemoryOrganisationUnitRepository {
    fn get_organisation_unit(&self, id: &str) -> Result<OrganisationUnit> {
        self.units
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Organisation unit {id}")))
    }

    fn list_organisation_units(&self) -> Result<Vec<OrganisationUnit>> {
        let mut units: Vec<OrganisationUnit> =
            self.units.iter().map(|entry| entry.value().clone()).collect();
        units.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(units)
    }

    fn get_children(&self, parent_id: &str) -> Result<Vec<OrganisationUnit>> {
        Ok(self
            .units
            .iter()
            .filter(|entry| entry.parent_id.as_deref() == Some(parent_id))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn create_organisation_unit(&self, unit: OrganisationUnit) -> Result<OrganisationUnit> {
        if self.units.contains_key(&unit.id) {
            return Err(Error::Repository(format!(
                "Organisation unit {} already exists",
                unit.id
            )));
        }
        self.units.insert(unit.id.clone(), unit.clone());
        Ok(unit)
    }

    async fn delete_organisation_unit(&self, id: &str) -> Result<usize> {
        Ok(self.units.remove(id).map(|_| 1).unwrap_or(0))
    }
}

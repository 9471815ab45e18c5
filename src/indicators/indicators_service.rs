//! Indicator type service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::deletion::{DeletionEvent, DeletionRegistry};
use crate::errors::ValidationError;
use crate::Result;

use super::{
    IndicatorType, IndicatorTypeRepositoryTrait, IndicatorTypeServiceTrait, IndicatorTypeUpdate,
    NewIndicatorType,
};

pub struct IndicatorTypeService {
    repository: Arc<dyn IndicatorTypeRepositoryTrait>,
    deletion_registry: Arc<DeletionRegistry>,
}

impl IndicatorTypeService {
    pub fn new(
        repository: Arc<dyn IndicatorTypeRepositoryTrait>,
        deletion_registry: Arc<DeletionRegistry>,
    ) -> Self {
        Self {
            repository,
            deletion_registry,
        }
    }

    fn validate(&self, name: &str, factor: i32, current_id: Option<&str>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if factor <= 0 {
            return Err(ValidationError::InvalidInput(format!(
                "Indicator type factor must be positive, got {factor}"
            ))
            .into());
        }
        let duplicate = self
            .repository
            .list_indicator_types()?
            .into_iter()
            .any(|it| it.name == name && Some(it.id.as_str()) != current_id);
        if duplicate {
            return Err(ValidationError::InvalidInput(format!(
                "An indicator type named '{name}' already exists"
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl IndicatorTypeServiceTrait for IndicatorTypeService {
    fn get_indicator_type(&self, id: &str) -> Result<IndicatorType> {
        self.repository.get_indicator_type(id)
    }

    fn list_indicator_types(&self) -> Result<Vec<IndicatorType>> {
        self.repository.list_indicator_types()
    }

    async fn create_indicator_type(&self, new: NewIndicatorType) -> Result<IndicatorType> {
        self.validate(&new.name, new.factor, None)?;
        self.repository.create_indicator_type(new).await
    }

    async fn update_indicator_type(&self, update: IndicatorTypeUpdate) -> Result<IndicatorType> {
        self.validate(&update.name, update.factor, Some(&update.id))?;
        self.repository.update_indicator_type(update).await
    }

    async fn delete_indicator_type(&self, id: &str) -> Result<()> {
        let indicator_type = self.repository.get_indicator_type(id)?;
        debug!("Requesting deletion of indicator type {id}");

        let event = DeletionEvent::new(indicator_type);
        self.deletion_registry.dispatch(&event)?;

        self.repository.delete_indicator_type(id).await?;
        Ok(())
    }
}

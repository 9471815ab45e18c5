//! Traits for indicator repositories and services.

use async_trait::async_trait;

use crate::Result;

use super::{Indicator, IndicatorType, IndicatorTypeUpdate, NewIndicator, NewIndicatorType};

/// Repository trait for indicator type persistence operations.
#[async_trait]
pub trait IndicatorTypeRepositoryTrait: Send + Sync {
    fn get_indicator_type(&self, id: &str) -> Result<IndicatorType>;
    fn list_indicator_types(&self) -> Result<Vec<IndicatorType>>;
    async fn create_indicator_type(&self, new: NewIndicatorType) -> Result<IndicatorType>;
    async fn update_indicator_type(&self, update: IndicatorTypeUpdate) -> Result<IndicatorType>;
    async fn delete_indicator_type(&self, id: &str) -> Result<usize>;
}

/// Repository trait for indicator persistence operations.
#[async_trait]
pub trait IndicatorRepositoryTrait: Send + Sync {
    fn get_indicator(&self, id: &str) -> Result<Indicator>;
    fn list_indicators(&self) -> Result<Vec<Indicator>>;
    fn get_indicators_by_type(&self, indicator_type_id: &str) -> Result<Vec<Indicator>>;
    async fn create_indicator(&self, new: NewIndicator) -> Result<Indicator>;
    async fn delete_indicator(&self, id: &str) -> Result<usize>;
}

/// Service trait for indicator type business logic.
#[async_trait]
pub trait IndicatorTypeServiceTrait: Send + Sync {
    fn get_indicator_type(&self, id: &str) -> Result<IndicatorType>;
    fn list_indicator_types(&self) -> Result<Vec<IndicatorType>>;
    async fn create_indicator_type(&self, new: NewIndicatorType) -> Result<IndicatorType>;
    async fn update_indicator_type(&self, update: IndicatorTypeUpdate) -> Result<IndicatorType>;
    /// Deletes an indicator type after consulting the deletion registry.
    async fn delete_indicator_type(&self, id: &str) -> Result<()>;
}

//! In-memory repositories for indicator types and indicators.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::{Error, Result};

use super::{
    Indicator, IndicatorRepositoryTrait, IndicatorType, IndicatorTypeRepositoryTrait,
    IndicatorTypeUpdate, NewIndicator, NewIndicatorType,
};

/// In-memory indicator type store.
#[derive(Default)]
pub struct InMemoryIndicatorTypeRepository {
    types: DashMap<String, IndicatorType>,
}

impl InMemoryIndicatorTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IndicatorTypeRepositoryTrait for InMemoryIndicatorTypeRepository {
    fn get_indicator_type(&self, id: &str) -> Result<IndicatorType> {
        self.types
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Indicator type {id}")))
    }

    fn list_indicator_types(&self) -> Result<Vec<IndicatorType>> {
        let mut types: Vec<IndicatorType> = self.types.iter().map(|entry| entry.value().clone()).collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn create_indicator_type(&self, new: NewIndicatorType) -> Result<IndicatorType> {
        let id = new.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.types.contains_key(&id) {
            return Err(Error::Repository(format!(
                "Indicator type {id} already exists"
            )));
        }
        let now = Utc::now().naive_utc();
        let indicator_type = IndicatorType {
            id: id.clone(),
            name: new.name,
            factor: new.factor,
            number: new.number,
            created_at: now,
            updated_at: now,
        };
        self.types.insert(id, indicator_type.clone());
        Ok(indicator_type)
    }

    async fn update_indicator_type(&self, update: IndicatorTypeUpdate) -> Result<IndicatorType> {
        let mut entry = self
            .types
            .get_mut(&update.id)
            .ok_or_else(|| Error::NotFound(format!("Indicator type {}", update.id)))?;
        entry.name = update.name;
        entry.factor = update.factor;
        entry.number = update.number;
        entry.updated_at = Utc::now().naive_utc();
        Ok(entry.value().clone())
    }

    async fn delete_indicator_type(&self, id: &str) -> Result<usize> {
        Ok(self.types.remove(id).map(|_| 1).unwrap_or(0))
    }
}

/// In-memory indicator store.
#[derive(Default)]
pub struct InMemoryIndicatorRepository {
    indicators: DashMap<String, Indicator>,
}

impl InMemoryIndicatorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IndicatorRepositoryTrait for InMemoryIndicatorRepository {
    fn get_indicator(&self, id: &str) -> Result<Indicator> {
        self.indicators
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::NotFound(format!("Indicator {id}")))
    }

    fn list_indicators(&self) -> Result<Vec<Indicator>> {
        let mut indicators: Vec<Indicator> =
            self.indicators.iter().map(|entry| entry.value().clone()).collect();
        indicators.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(indicators)
    }

    fn get_indicators_by_type(&self, indicator_type_id: &str) -> Result<Vec<Indicator>> {
        Ok(self
            .indicators
            .iter()
            .filter(|entry| entry.indicator_type_id == indicator_type_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn create_indicator(&self, new: NewIndicator) -> Result<Indicator> {
        let id = new.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.indicators.contains_key(&id) {
            return Err(Error::Repository(format!("Indicator {id} already exists")));
        }
        let now = Utc::now().naive_utc();
        let indicator = Indicator {
            id: id.clone(),
            name: new.name,
            indicator_type_id: new.indicator_type_id,
            numerator: new.numerator,
            denominator: new.denominator,
            annualized: new.annualized,
            created_at: now,
            updated_at: now,
        };
        self.indicators.insert(id, indicator.clone());
        Ok(indicator)
    }

    async fn delete_indicator(&self, id: &str) -> Result<usize> {
        Ok(self.indicators.remove(id).map(|_| 1).unwrap_or(0))
    }
}

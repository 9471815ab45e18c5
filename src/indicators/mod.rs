//! Indicators module - domain models, services, and traits.
//!
//! Indicator types carry the factor applied to indicator formulas. Deleting
//! an indicator type is guarded by [`IndicatorDeletionHandler`].

mod indicators_deletion;
mod indicators_model;
mod indicators_repository;
mod indicators_service;
mod indicators_traits;

pub use indicators_deletion::IndicatorDeletionHandler;
pub use indicators_model::{
    Indicator, IndicatorType, IndicatorTypeUpdate, NewIndicator, NewIndicatorType,
};
pub use indicators_repository::{InMemoryIndicatorRepository, InMemoryIndicatorTypeRepository};
pub use indicators_service::IndicatorTypeService;
pub use indicators_traits::{
    IndicatorRepositoryTrait, IndicatorTypeRepositoryTrait, IndicatorTypeServiceTrait,
};

//! Domain models for indicator types and indicators.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An indicator type supplies the factor applied to an indicator's formula
/// (e.g. "Percent" with factor 100, "Per thousand" with factor 1000).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorType {
    pub id: String,
    pub name: String,
    pub factor: i32,
    /// true = plain number, the factor is ignored by consumers
    pub number: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data for creating a new indicator type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIndicatorType {
    pub id: Option<String>,
    pub name: String,
    pub factor: i32,
    pub number: bool,
}

impl Default for NewIndicatorType {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            factor: 1,
            number: false,
        }
    }
}

/// Data for updating an existing indicator type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorTypeUpdate {
    pub id: String,
    pub name: String,
    pub factor: i32,
    pub number: bool,
}

/// A calculated measure defined by a numerator and denominator expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub id: String,
    pub name: String,
    pub indicator_type_id: String,
    pub numerator: String,
    pub denominator: String,
    pub annualized: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data for creating a new indicator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIndicator {
    pub id: Option<String>,
    pub name: String,
    pub indicator_type_id: String,
    pub numerator: String,
    pub denominator: String,
    pub annualized: bool,
}

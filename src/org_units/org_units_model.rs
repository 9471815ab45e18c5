//! Domain models for organisation units.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A node in the organisation unit hierarchy (country, district, facility).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationUnit {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    /// 1-based depth; roots are level 1.
    pub level: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data for creating a new organisation unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganisationUnit {
    pub id: Option<String>,
    pub name: String,
    pub parent_id: Option<String>,
}

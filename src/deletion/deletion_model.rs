//! Deletion-management model types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::indicators::{Indicator, IndicatorType};
use crate::org_units::OrganisationUnit;
use crate::relationships::{Relationship, RelationshipType};

/// Closed enumeration of metadata types that participate in deletion
/// management.
///
/// Listeners register against exactly one kind; dispatch matches the kind of
/// the object under deletion, with no hierarchy or subtype matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    IndicatorType,
    Indicator,
    RelationshipType,
    Relationship,
    OrganisationUnit,
}

impl ObjectKind {
    /// Human-readable label used in veto messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::IndicatorType => "Indicator type",
            ObjectKind::Indicator => "Indicator",
            ObjectKind::RelationshipType => "Relationship type",
            ObjectKind::Relationship => "Relationship",
            ObjectKind::OrganisationUnit => "Organisation unit",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The object instance under consideration for deletion.
///
/// One variant per deletable model. Listeners receive the full instance so
/// reference checks can use any of its fields, not just the id.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeletionCandidate {
    IndicatorType(IndicatorType),
    Indicator(Indicator),
    RelationshipType(RelationshipType),
    Relationship(Relationship),
    OrganisationUnit(OrganisationUnit),
}

impl DeletionCandidate {
    pub fn kind(&self) -> ObjectKind {
        match self {
            DeletionCandidate::IndicatorType(_) => ObjectKind::IndicatorType,
            DeletionCandidate::Indicator(_) => ObjectKind::Indicator,
            DeletionCandidate::RelationshipType(_) => ObjectKind::RelationshipType,
            DeletionCandidate::Relationship(_) => ObjectKind::Relationship,
            DeletionCandidate::OrganisationUnit(_) => ObjectKind::OrganisationUnit,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            DeletionCandidate::IndicatorType(it) => &it.id,
            DeletionCandidate::Indicator(i) => &i.id,
            DeletionCandidate::RelationshipType(rt) => &rt.id,
            DeletionCandidate::Relationship(r) => &r.id,
            DeletionCandidate::OrganisationUnit(ou) => &ou.id,
        }
    }

    /// Name shown to users in veto messages. Relationships have no name of
    /// their own, so their id stands in.
    pub fn display_name(&self) -> &str {
        match self {
            DeletionCandidate::IndicatorType(it) => &it.name,
            DeletionCandidate::Indicator(i) => &i.name,
            DeletionCandidate::RelationshipType(rt) => &rt.name,
            DeletionCandidate::Relationship(r) => &r.id,
            DeletionCandidate::OrganisationUnit(ou) => &ou.name,
        }
    }
}

impl From<IndicatorType> for DeletionCandidate {
    fn from(value: IndicatorType) -> Self {
        DeletionCandidate::IndicatorType(value)
    }
}

impl From<Indicator> for DeletionCandidate {
    fn from(value: Indicator) -> Self {
        DeletionCandidate::Indicator(value)
    }
}

impl From<RelationshipType> for DeletionCandidate {
    fn from(value: RelationshipType) -> Self {
        DeletionCandidate::RelationshipType(value)
    }
}

impl From<Relationship> for DeletionCandidate {
    fn from(value: Relationship) -> Self {
        DeletionCandidate::Relationship(value)
    }
}

impl From<OrganisationUnit> for DeletionCandidate {
    fn from(value: OrganisationUnit) -> Self {
        DeletionCandidate::OrganisationUnit(value)
    }
}

/// A single deletion attempt.
///
/// Created per attempt, handed to each registered listener, and discarded
/// once dispatch resolves to allowed or vetoed.
#[derive(Clone, Debug)]
pub struct DeletionEvent {
    candidate: DeletionCandidate,
}

impl DeletionEvent {
    pub fn new(candidate: impl Into<DeletionCandidate>) -> Self {
        Self {
            candidate: candidate.into(),
        }
    }

    pub fn candidate(&self) -> &DeletionCandidate {
        &self.candidate
    }

    pub fn kind(&self) -> ObjectKind {
        self.candidate.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relationships::RelationshipType;
    use chrono::Utc;

    fn sibling_type() -> RelationshipType {
        let now = Utc::now().naive_utc();
        RelationshipType {
            id: "rt-1".to_string(),
            name: "Sibling".to_string(),
            bidirectional: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_candidate_accessors() {
        let event = DeletionEvent::new(sibling_type());
        assert_eq!(event.kind(), ObjectKind::RelationshipType);
        assert_eq!(event.candidate().id(), "rt-1");
        assert_eq!(event.candidate().display_name(), "Sibling");
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate: DeletionCandidate = sibling_type().into();

        let json = serde_json::to_string(&candidate).unwrap();
        assert!(json.contains("relationship_type"));

        let deserialized: DeletionCandidate = serde_json::from_str(&json).unwrap();
        match deserialized {
            DeletionCandidate::RelationshipType(rt) => {
                assert_eq!(rt.name, "Sibling");
                assert!(rt.bidirectional);
            }
            _ => panic!("Expected RelationshipType"),
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ObjectKind::IndicatorType.to_string(), "Indicator type");
        assert_eq!(
            ObjectKind::OrganisationUnit.to_string(),
            "Organisation unit"
        );
    }
}

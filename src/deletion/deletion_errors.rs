//! Veto types for deletion management.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ObjectKind;

/// A listener's refusal to allow a deletion.
///
/// A veto is an expected, user-facing outcome ("cannot delete: referenced by
/// N records"), not an internal error. It is surfaced synchronously to the
/// caller and never retried.
#[derive(Clone, Debug, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{kind} '{object_name}' could not be deleted: {message}")]
pub struct VetoReason {
    /// Name of the listener that refused the deletion.
    pub listener: String,
    pub kind: ObjectKind,
    pub object_name: String,
    /// Human-readable explanation, e.g. "it is still referenced by 3
    /// relationships".
    pub message: String,
}

impl VetoReason {
    pub fn new(
        listener: impl Into<String>,
        kind: ObjectKind,
        object_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            listener: listener.into(),
            kind,
            object_name: object_name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_veto_reason_display() {
        let veto = VetoReason::new(
            "RelationshipDeletionHandler",
            ObjectKind::RelationshipType,
            "Sibling",
            "it is still referenced by 1 relationship",
        );

        assert_eq!(
            veto.to_string(),
            "Relationship type 'Sibling' could not be deleted: it is still referenced by 1 relationship"
        );
    }
}

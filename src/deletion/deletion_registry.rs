//! Process-wide deletion listener registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{debug, info, warn};

use super::{DeletionEvent, DeletionListener, ListenerResult, ObjectKind};

/// Registry mapping an object kind to its ordered deletion listeners.
///
/// Registration happens during startup wiring; dispatch is read-mostly and
/// may run from many threads concurrently. The listener map sits behind a
/// read-write lock, and dispatch clones the listener handles out of the map
/// before invoking them, so listener-side latency never holds the lock.
pub struct DeletionRegistry {
    listeners: RwLock<HashMap<ObjectKind, Vec<Arc<dyn DeletionListener>>>>,
}

impl DeletionRegistry {
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Adds `listener` to the ordered sequence for its kind.
    ///
    /// Insertion order is preserved and duplicates are not collapsed: a
    /// listener registered twice is consulted once per registration. There
    /// is no unregistration.
    pub fn register(&self, listener: Arc<dyn DeletionListener>) {
        let kind = listener.kind();
        info!(
            "Registered deletion listener '{}' for {}",
            listener.name(),
            kind
        );
        let mut map = self.listeners.write().unwrap();
        map.entry(kind).or_default().push(listener);
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: ObjectKind) -> usize {
        let map = self.listeners.read().unwrap();
        map.get(&kind).map(|l| l.len()).unwrap_or(0)
    }

    /// Consults every listener registered for the event's kind, in
    /// registration order.
    ///
    /// The first veto halts dispatch and is returned to the caller; when all
    /// listeners pass (or none are registered) the deletion is allowed. The
    /// registry never performs the deletion itself.
    pub fn dispatch(&self, event: &DeletionEvent) -> ListenerResult {
        let kind = event.kind();
        let listeners = {
            let map = self.listeners.read().unwrap();
            map.get(&kind).cloned().unwrap_or_default()
        };

        if listeners.is_empty() {
            debug!("No deletion listeners registered for {}, allowing", kind);
            return Ok(());
        }

        for listener in &listeners {
            debug!(
                "Consulting deletion listener '{}' for {} '{}'",
                listener.name(),
                kind,
                event.candidate().display_name()
            );
            if let Err(veto) = listener.on_deletion_requested(event) {
                warn!("Deletion vetoed: {}", veto);
                return Err(veto);
            }
        }

        debug!(
            "Deletion of {} '{}' allowed by {} listener(s)",
            kind,
            event.candidate().display_name(),
            listeners.len()
        );
        Ok(())
    }
}

impl Default for DeletionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deletion::VetoReason;
    use crate::relationships::{Relationship, RelationshipType};
    use chrono::Utc;
    use std::sync::Mutex;

    // ============== Mock Listeners ==============

    /// Records invocations in a shared call log and answers with a fixed
    /// verdict.
    struct RecordingListener {
        name: String,
        kind: ObjectKind,
        veto_message: Option<String>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingListener {
        fn allowing(name: &str, kind: ObjectKind, calls: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                kind,
                veto_message: None,
                calls,
            })
        }

        fn vetoing(
            name: &str,
            kind: ObjectKind,
            message: &str,
            calls: Arc<Mutex<Vec<String>>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                kind,
                veto_message: Some(message.to_string()),
                calls,
            })
        }
    }

    impl DeletionListener for RecordingListener {
        fn name(&self) -> &str {
            &self.name
        }

        fn kind(&self) -> ObjectKind {
            self.kind
        }

        fn on_deletion_requested(&self, event: &DeletionEvent) -> ListenerResult {
            self.calls.lock().unwrap().push(self.name.clone());
            match &self.veto_message {
                Some(message) => Err(VetoReason::new(
                    &self.name,
                    event.kind(),
                    event.candidate().display_name(),
                    message,
                )),
                None => Ok(()),
            }
        }
    }

    fn relationship_type(name: &str) -> RelationshipType {
        let now = Utc::now().naive_utc();
        RelationshipType {
            id: format!("rt-{name}"),
            name: name.to_string(),
            bidirectional: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn relationship(type_id: &str) -> Relationship {
        Relationship {
            id: "rel-1".to_string(),
            relationship_type_id: type_id.to_string(),
            from_entity: "te-a".to_string(),
            to_entity: "te-b".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_dispatch_with_no_listeners_allows() {
        let registry = DeletionRegistry::new();
        let event = DeletionEvent::new(relationship_type("Sibling"));

        assert!(registry.dispatch(&event).is_ok());
    }

    #[test]
    fn test_veto_propagates_to_caller() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = DeletionRegistry::new();
        registry.register(RecordingListener::vetoing(
            "relationship-check",
            ObjectKind::RelationshipType,
            "it is still referenced by 1 relationship",
            calls.clone(),
        ));

        let event = DeletionEvent::new(relationship_type("Sibling"));
        let veto = registry.dispatch(&event).unwrap_err();

        assert_eq!(veto.listener, "relationship-check");
        assert_eq!(veto.kind, ObjectKind::RelationshipType);
        assert_eq!(veto.object_name, "Sibling");
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_all_listeners_pass_allows() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = DeletionRegistry::new();
        registry.register(RecordingListener::allowing(
            "a",
            ObjectKind::RelationshipType,
            calls.clone(),
        ));
        registry.register(RecordingListener::allowing(
            "b",
            ObjectKind::RelationshipType,
            calls.clone(),
        ));

        let event = DeletionEvent::new(relationship_type("Sibling"));
        assert!(registry.dispatch(&event).is_ok());
        assert_eq!(*calls.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = DeletionRegistry::new();
        registry.register(RecordingListener::allowing(
            "first",
            ObjectKind::RelationshipType,
            calls.clone(),
        ));
        registry.register(RecordingListener::allowing(
            "second",
            ObjectKind::RelationshipType,
            calls.clone(),
        ));
        registry.register(RecordingListener::allowing(
            "third",
            ObjectKind::RelationshipType,
            calls.clone(),
        ));

        let event = DeletionEvent::new(relationship_type("Sibling"));
        registry.dispatch(&event).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_first_veto_halts_dispatch() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = DeletionRegistry::new();
        registry.register(RecordingListener::allowing(
            "first",
            ObjectKind::RelationshipType,
            calls.clone(),
        ));
        registry.register(RecordingListener::vetoing(
            "second",
            ObjectKind::RelationshipType,
            "references exist",
            calls.clone(),
        ));
        registry.register(RecordingListener::allowing(
            "third",
            ObjectKind::RelationshipType,
            calls.clone(),
        ));

        let event = DeletionEvent::new(relationship_type("Sibling"));
        let veto = registry.dispatch(&event).unwrap_err();

        assert_eq!(veto.listener, "second");
        // "third" is never consulted.
        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_duplicate_registration_runs_per_registration() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = DeletionRegistry::new();
        let listener =
            RecordingListener::allowing("dup", ObjectKind::RelationshipType, calls.clone());
        registry.register(listener.clone());
        registry.register(listener);

        assert_eq!(registry.listener_count(ObjectKind::RelationshipType), 2);

        let event = DeletionEvent::new(relationship_type("Sibling"));
        registry.dispatch(&event).unwrap();
        assert_eq!(*calls.lock().unwrap(), vec!["dup", "dup"]);
    }

    #[test]
    fn test_dispatch_matches_exact_kind_only() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = DeletionRegistry::new();
        registry.register(RecordingListener::vetoing(
            "type-check",
            ObjectKind::RelationshipType,
            "references exist",
            calls.clone(),
        ));

        // A Relationship deletion never consults the RelationshipType listener.
        let event = DeletionEvent::new(relationship("rt-1"));
        assert!(registry.dispatch(&event).is_ok());
        assert!(calls.lock().unwrap().is_empty());
    }
}

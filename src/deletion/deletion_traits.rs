//! Deletion listener trait.

use super::{DeletionEvent, ObjectKind, VetoReason};

/// Outcome of a single listener check: `Ok(())` allows the deletion,
/// `Err(VetoReason)` refuses it.
pub type ListenerResult = std::result::Result<(), VetoReason>;

/// A handler consulted before an object of a given kind is deleted.
///
/// Listeners are registered once during startup wiring and are immutable
/// afterwards. Dispatch is synchronous; a listener may perform blocking
/// lookups (e.g. querying whether dependent records exist) inside
/// `on_deletion_requested`.
///
/// # Design Rules
///
/// - A listener answers for exactly one [`ObjectKind`]; it is never consulted
///   for other kinds.
/// - Listeners must not perform the deletion themselves; that is the calling
///   service's job once dispatch allows it.
/// - A veto only expresses "not allowed"; unrelated listener failures should
///   be resolved conservatively (refuse rather than allow unverified).
pub trait DeletionListener: Send + Sync {
    /// Listener name used in veto reasons and logs.
    fn name(&self) -> &str;

    /// The single object kind this listener is consulted for.
    fn kind(&self) -> ObjectKind;

    /// Decide whether the object wrapped by `event` may be deleted.
    fn on_deletion_requested(&self, event: &DeletionEvent) -> ListenerResult;
}

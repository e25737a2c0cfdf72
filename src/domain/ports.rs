use crate::domain::model::{LockableKind, SecurityReport};
use std::rc::Rc;

/// Anything that carries a binary lock state.
///
/// Mutators take `&self` so one shared handle can be locked or unlocked by
/// whichever aggregate or service holds it. None of these operations fail.
pub trait Lockable {
    fn kind(&self) -> LockableKind;
    fn is_locked(&self) -> bool;
    fn lock(&self);
    fn unlock(&self);

    /// Stable type label, "Door" or "Window".
    fn get_type(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// Shared, non-owning handle to a lockable item.
pub type SharedLockable = Rc<dyn Lockable>;

/// Renders a [`SecurityReport`] as text.
pub trait ReportFormatter {
    fn format(&self, report: &SecurityReport) -> String;
}

use crate::domain::ports::Lockable;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockableKind {
    Door,
    Window,
}

impl LockableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockableKind::Door => "Door",
            LockableKind::Window => "Window",
        }
    }
}

impl fmt::Display for LockableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
pub struct Door {
    locked: Cell<bool>,
}

impl Door {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(locked: bool) -> Self {
        Self {
            locked: Cell::new(locked),
        }
    }
}

impl Lockable for Door {
    fn kind(&self) -> LockableKind {
        LockableKind::Door
    }

    fn is_locked(&self) -> bool {
        self.locked.get()
    }

    fn lock(&self) {
        self.locked.set(true);
    }

    fn unlock(&self) {
        self.locked.set(false);
    }
}

#[derive(Debug, Default)]
pub struct Window {
    locked: Cell<bool>,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(locked: bool) -> Self {
        Self {
            locked: Cell::new(locked),
        }
    }
}

impl Lockable for Window {
    fn kind(&self) -> LockableKind {
        LockableKind::Window
    }

    fn is_locked(&self) -> bool {
        self.locked.get()
    }

    fn lock(&self) {
        self.locked.set(true);
    }

    fn unlock(&self) {
        self.locked.set(false);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityStatus {
    NoItems,
    Secure,
    Insecure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based position in insertion order.
    pub position: usize,
    pub kind: LockableKind,
    pub locked: bool,
}

/// Point-in-time view of every tracked item's lock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub report_name: String,
    pub status: SecurityStatus,
    pub entries: Vec<ReportEntry>,
}

impl SecurityReport {
    pub fn new(report_name: impl Into<String>, entries: Vec<ReportEntry>) -> Self {
        let status = if entries.is_empty() {
            SecurityStatus::NoItems
        } else if entries.iter().all(|e| e.locked) {
            SecurityStatus::Secure
        } else {
            SecurityStatus::Insecure
        };

        Self {
            report_name: report_name.into(),
            status,
            entries,
        }
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn unlocked(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| !e.locked)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked().count()
    }

    pub fn is_secure(&self) -> bool {
        self.status == SecurityStatus::Secure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_lock_unlock_is_idempotent() {
        let door = Door::new();
        assert!(!door.is_locked());

        door.lock();
        door.lock();
        assert!(door.is_locked());

        door.unlock();
        door.unlock();
        assert!(!door.is_locked());
    }

    #[test]
    fn test_window_tracks_most_recent_call() {
        let window = Window::with_state(true);
        assert!(window.is_locked());

        for (i, lock) in [false, true, true, false, true].into_iter().enumerate() {
            if lock {
                window.lock();
            } else {
                window.unlock();
            }
            assert_eq!(window.is_locked(), lock, "step {}", i);
        }
    }

    #[test]
    fn test_type_discriminator() {
        assert_eq!(Door::new().get_type(), "Door");
        assert_eq!(Window::new().get_type(), "Window");
        assert_eq!(LockableKind::Window.to_string(), "Window");
    }

    #[test]
    fn test_report_status() {
        let empty = SecurityReport::new("r", vec![]);
        assert_eq!(empty.status, SecurityStatus::NoItems);

        let entries = vec![
            ReportEntry {
                position: 1,
                kind: LockableKind::Door,
                locked: true,
            },
            ReportEntry {
                position: 2,
                kind: LockableKind::Window,
                locked: false,
            },
        ];
        let report = SecurityReport::new("r", entries);
        assert_eq!(report.status, SecurityStatus::Insecure);
        assert_eq!(report.unlocked_count(), 1);
        assert_eq!(report.unlocked().next().map(|e| e.position), Some(2));
    }
}

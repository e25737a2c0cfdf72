pub mod car;
pub mod house;
pub mod report;
pub mod security;

pub use crate::domain::model::{Door, LockableKind, SecurityReport, Window};
pub use crate::domain::ports::{Lockable, ReportFormatter, SharedLockable};
pub use crate::utils::error::Result;

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::scenario::Scenario;
pub use config::{toml_config::ScenarioConfig, ReportFormat};
pub use crate::core::{
    car::Car,
    house::House,
    report::{JsonFormatter, PlainTextFormatter},
    security::SecurityService,
};
pub use domain::model::{Door, LockableKind, SecurityReport, SecurityStatus, Window};
pub use domain::ports::{Lockable, ReportFormatter, SharedLockable};
pub use utils::error::{Result, SecurityError};

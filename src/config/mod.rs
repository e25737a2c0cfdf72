pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "security-service")]
#[command(about = "Reports whether the doors and windows of houses and cars are locked")]
pub struct CliConfig {
    /// Path to a TOML scenario file; the built-in demo scenario is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the report format from the scenario file
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Lock every tracked item before producing the report
    #[arg(long)]
    pub lock_all: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

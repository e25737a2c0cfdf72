use crate::config::ReportFormat;
use crate::core::car::{MAX_CAR_DOORS, MIN_CAR_DOORS};
use crate::utils::error::{Result, SecurityError};
use crate::utils::validation::{validate_cardinality, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub report: ReportConfig,
    #[serde(default)]
    pub houses: Vec<HouseConfig>,
    #[serde(default)]
    pub cars: Vec<CarConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    #[serde(default)]
    pub format: ReportFormat,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LockableConfig {
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseConfig {
    pub name: String,
    #[serde(default)]
    pub doors: Vec<LockableConfig>,
    #[serde(default)]
    pub windows: Vec<LockableConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarConfig {
    pub name: String,
    #[serde(default)]
    pub doors: Vec<LockableConfig>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SecurityError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SecurityError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Built-in scenario: one house with an unlocked door and window.
    pub fn demo() -> Self {
        Self {
            report: ReportConfig {
                name: "Daily Report".to_string(),
                format: ReportFormat::Text,
                pretty: None,
            },
            houses: vec![HouseConfig {
                name: "Main St".to_string(),
                doors: vec![LockableConfig::default()],
                windows: vec![LockableConfig::default()],
            }],
            cars: Vec::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.houses
            .iter()
            .map(|h| h.doors.len() + h.windows.len())
            .chain(self.cars.iter().map(|c| c.doors.len()))
            .sum()
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("report.name", &self.report.name)?;

        for (i, house) in self.houses.iter().enumerate() {
            validate_non_empty_string(&format!("houses[{}].name", i), &house.name)?;
            let entity = format!("houses[{}]", i);
            validate_cardinality(&entity, "doors", house.doors.len(), 1, None)?;
            validate_cardinality(&entity, "windows", house.windows.len(), 1, None)?;
        }

        for (i, car) in self.cars.iter().enumerate() {
            validate_non_empty_string(&format!("cars[{}].name", i), &car.name)?;
            validate_cardinality(
                &format!("cars[{}]", i),
                "doors",
                car.doors.len(),
                MIN_CAR_DOORS,
                Some(MAX_CAR_DOORS),
            )?;
        }

        Ok(())
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Constraint violation on {entity}: {message}")]
    ConstraintViolation { entity: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SecurityError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn constraint_violation(entity: &str, message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            entity: entity.to_string(),
            message: message.into(),
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { field, reason } => {
                format!("The value given for '{}' is not valid: {}", field, reason)
            }
            Self::ConstraintViolation { entity, message } => {
                format!("{} is not in a valid state: {}", entity, message)
            }
            Self::ConfigError { message } => format!("Could not load the scenario: {}", message),
            Self::IoError(e) => format!("Could not read a file: {}", e),
            Self::SerializationError(e) => format!("Could not serialize the report: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Provide a non-empty name for every house, car and report",
            Self::ConstraintViolation { .. } => {
                "Houses need at least one door and one window; cars need between 2 and 4 doors"
            }
            Self::ConfigError { .. } => "Check that the scenario file is valid TOML",
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) => "Try the plain text report format",
        }
    }

    /// 依錯誤種類決定程式結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::ConstraintViolation { .. } => 2,
            Self::ConfigError { .. } => 1,
            Self::IoError(_) | Self::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SecurityError>;

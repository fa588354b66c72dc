use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl DemoError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DemoError::ConfigValidationError { .. }
                | DemoError::InvalidConfigValueError { .. }
                | DemoError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "Output stream was closed before the script finished".to_string()
            }
            DemoError::IoError(e) => format!("Could not read or write: {}", e),
            DemoError::SerializationError(e) => format!("Could not encode run report: {}", e),
            DemoError::ConfigValidationError { field, message } => {
                format!("Settings file is invalid ({}): {}", field, message)
            }
            DemoError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting `{}` = \"{}\" is not allowed: {}", field, value, reason)
            }
            DemoError::MissingConfigError { field } => {
                format!("Setting `{}` is required", field)
            }
        }
    }

    /// Process exit code for the binary: 1 for bad settings, 2 for I/O, 3 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            e if e.is_config_error() => 1,
            DemoError::IoError(_) => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MergeError {
    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MergeError::IoError(e) => format!("File access failed: {}", e),
            MergeError::ConfigError { message } => format!("Configuration problem: {}", message),
            MergeError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            MergeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MergeError::IoError(_) => {
                "Check that every input file exists and the output directory is writable"
            }
            MergeError::ConfigError { .. } => "Check the TOML syntax of the config file",
            MergeError::MissingConfigError { .. } => {
                "Pass --input, --suffix and --output, or set them under [merge] in the config file"
            }
            MergeError::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;

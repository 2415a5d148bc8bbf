use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Payment service request failed: {0}")]
    PaymentApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Account store error: {message}")]
    AccountStoreError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::PaymentApiError(_) => ErrorCategory::Network,
            AppError::IoError(_) | AppError::AccountStoreError { .. } => ErrorCategory::Storage,
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Network failures are transient; re-running the tool retries them
            AppError::PaymentApiError(_) => ErrorSeverity::Medium,
            AppError::IoError(_) | AppError::AccountStoreError { .. } => ErrorSeverity::High,
            AppError::SerializationError(_) => ErrorSeverity::High,
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::PaymentApiError(_) => {
                "Check that the payment service endpoint is reachable and try again".to_string()
            }
            AppError::IoError(_) => "Check file permissions and that the path exists".to_string(),
            AppError::AccountStoreError { .. } => {
                "Check that the accounts file exists and contains a JSON array of accounts"
                    .to_string()
            }
            AppError::SerializationError(_) => {
                "Check that the input data is well-formed JSON".to_string()
            }
            AppError::ConfigError { .. } => "Review the configuration file syntax".to_string(),
            AppError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and re-run", field)
            }
            AppError::MissingConfigError { field } => {
                format!("Provide a value for '{}' via CLI flag or config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::PaymentApiError(_) => "Could not reach the payment service".to_string(),
            AppError::IoError(e) => format!("File operation failed: {}", e),
            AppError::AccountStoreError { message } => {
                format!("Could not load accounts: {}", message)
            }
            AppError::SerializationError(_) => "Data could not be parsed".to_string(),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            AppError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

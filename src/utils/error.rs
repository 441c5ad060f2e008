use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to fetch {resource}: {status}")]
    FetchFailure { resource: String, status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },
}

/// 錯誤嚴重程度，main 以此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Io,
    Data,
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::FetchFailure { .. } | PageError::ApiError(_) => ErrorCategory::Network,
            PageError::ConfigError { .. }
            | PageError::InvalidConfigValueError { .. }
            | PageError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PageError::IoError(_) => ErrorCategory::Io,
            PageError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Data => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not load the portfolio data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File system problem: {}", self),
            ErrorCategory::Data => format!("Unexpected response data: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the backend API is running and the base URL is correct"
            }
            ErrorCategory::Configuration => "Review the CLI flags and the site config file",
            ErrorCategory::Io => "Check that the output path exists and is writable",
            ErrorCategory::Data => "Check that the API returns the expected JSON shapes",
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

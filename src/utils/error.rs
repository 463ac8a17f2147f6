use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to read partial '{name}' at {path}: {source}")]
    PartialReadError {
        name: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read page {path}: {source}")]
    PageReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write page {path}: {source}")]
    PageWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration for {field}: {message}")]
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Partial,
    Page,
    Configuration,
    System,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::PartialReadError { .. } => ErrorCategory::Partial,
            SiteError::PageReadError { .. } | SiteError::PageWriteError { .. } => {
                ErrorCategory::Page
            }
            SiteError::IoError(_) => ErrorCategory::System,
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::PartialReadError { path, .. } => {
                format!("Check that the partial '{}' exists and is UTF-8 text, or fix its path in the site file", path)
            }
            SiteError::PageReadError { path, .. } => format!(
                "Check that '{}' exists under the site root and is readable UTF-8 text",
                path
            ),
            SiteError::PageWriteError { path, .. } => {
                format!("Check write permissions for '{}'", path)
            }
            SiteError::IoError(_) => "Check file permissions and available disk space".to_string(),
            SiteError::ConfigError { .. } | SiteError::ConfigValidationError { .. } => {
                "Review the site configuration file".to_string()
            }
            SiteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the site configuration", field)
            }
            SiteError::MissingConfigError { field } => {
                format!("Add '{}' to the site configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Partial => format!("Build aborted before touching any page: {}", self),
            ErrorCategory::Page => format!("Build aborted: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

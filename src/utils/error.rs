use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::IoError(_) => ErrorCategory::Io,
            PlannerError::SerializationError(_)
            | PlannerError::CsvError(_)
            | PlannerError::CatalogError { .. } => ErrorCategory::Data,
            PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. }
            | PlannerError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlannerError::IoError(_) => {
                "Check that the paths exist and are readable/writable".to_string()
            }
            PlannerError::SerializationError(_) => {
                "Check that the input file is valid JSON with the expected fields".to_string()
            }
            PlannerError::CsvError(_) => "Check the output directory and retry".to_string(),
            PlannerError::ConfigValidationError { field, .. }
            | PlannerError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in your configuration", field)
            }
            PlannerError::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the config file", field)
            }
            PlannerError::CatalogError { .. } => {
                "Provide a catalog as a JSON array of courses, or enable the builtin fallback"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Data => format!("Could not read the learning data: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

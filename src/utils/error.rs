use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in {source_name}: {message}")]
    ConfigParseError { source_name: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid data in {location}: {reason}")]
    InvalidDataError { location: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Output,
}

impl AnalyticsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyticsError::ConfigParseError { .. }
            | AnalyticsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AnalyticsError::CsvError(_) | AnalyticsError::InvalidDataError { .. } => {
                ErrorCategory::Data
            }
            AnalyticsError::IoError(_) | AnalyticsError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Data => 2,
            ErrorCategory::Output => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalyticsError::ConfigParseError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            AnalyticsError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file or on the command line"
            }
            AnalyticsError::CsvError(_) => {
                "Make sure the catalog has the header id,name,category,price,in_stock"
            }
            AnalyticsError::InvalidDataError { .. } => {
                "Correct the reported product or order in the dataset"
            }
            AnalyticsError::IoError(_) => "Check that the path exists and is writable",
            AnalyticsError::SerializationError(_) => "Try the text output format instead",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let config = AnalyticsError::InvalidConfigValueError {
            field: "store.tax_rate".to_string(),
            value: "2".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);

        let data = AnalyticsError::InvalidDataError {
            location: "order A100".to_string(),
            reason: "qty must be positive".to_string(),
        };
        assert_eq!(data.exit_code(), 2);

        let io = AnalyticsError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_display_includes_field() {
        let err = AnalyticsError::InvalidConfigValueError {
            field: "store.currency".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert!(err.to_string().contains("store.currency"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON-RPC call failed: {message}")]
    RpcError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid query parameter '{param}': {value}")]
    InvalidQueryError { param: String, value: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Configuration,
    Request,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::HttpError(_) => ErrorCategory::Network,
            CatalogError::RpcError { .. } => ErrorCategory::Remote,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::InvalidQueryError { .. } => ErrorCategory::Request,
            CatalogError::SerializationError(_) | CatalogError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            CatalogError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the ERP endpoint is reachable and try again",
            ErrorCategory::Remote => {
                "Check the ERP credentials (ODOO_DB, ODOO_USER, ODOO_API) and the requested model"
            }
            ErrorCategory::Configuration => {
                "Review the configuration file or the ODOO_* environment variables"
            }
            ErrorCategory::Request => "Use non-negative integers for limit and offset",
            ErrorCategory::Data => "The remote service returned data in an unexpected shape",
            ErrorCategory::System => "Check file permissions and available resources",
        }
    }

    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Remote | ErrorCategory::Data => {
                "Error loading products. Please try again.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Process exit code derived from severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_error_is_remote_and_retryable() {
        let err = CatalogError::RpcError {
            message: r#"{"code":200,"message":"Odoo Server Error"}"#.to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.user_friendly_message(),
            "Error loading products. Please try again."
        );
    }

    #[test]
    fn test_config_error_keeps_details_for_user() {
        let err = CatalogError::MissingConfigError {
            field: "odoo.url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("odoo.url"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_query_error_is_low_severity() {
        let err = CatalogError::InvalidQueryError {
            param: "limit".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.to_string(), "Invalid query parameter 'limit': abc");
    }
}

use std::fmt;

/// Custom error type for Cloud Foundry client operations
#[derive(Debug)]
pub enum CfError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response carrying an `error` field
    Api { status: u16, message: String },
    /// API returned an error response without a recognisable error body
    UnexpectedResponse { status: u16, body: String },
    /// Pagination did not terminate within the configured page ceiling
    PaginationLimit { max_pages: usize },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for CfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CfError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CfError::UnexpectedResponse { status, body } => {
                write!(f, "API request failed with status {}: {}", status, body)
            }
            CfError::PaginationLimit { max_pages } => {
                write!(f, "Pagination limit exceeded: more than {} pages", max_pages)
            }
            CfError::Json(msg) => write!(f, "JSON error: {}", msg),
            CfError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CfError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CfError {
    fn from(err: reqwest::Error) -> Self {
        CfError::Http(err)
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Json(err.to_string())
    }
}

/// Result type alias for Cloud Foundry operations
pub type Result<T> = std::result::Result<T, CfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = CfError::Api {
            status: 404,
            message: "FAKE_404".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("FAKE_404"));
    }

    #[test]
    fn test_unexpected_response_display() {
        let err = CfError::UnexpectedResponse {
            status: 500,
            body: "FAKE_500".to_string(),
        };
        assert!(err.to_string().contains("status 500"));
        assert!(err.to_string().contains("FAKE_500"));
    }

    #[test]
    fn test_pagination_limit_display() {
        let err = CfError::PaginationLimit { max_pages: 3 };
        assert!(err.to_string().contains("Pagination limit exceeded"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CfError>();
    }

    #[test]
    fn test_config_error_display() {
        let err = CfError::Config("Missing required config".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Missing required config"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CfError = json_err.into();
        match err {
            CfError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected CfError::Json"),
        }
    }

    #[test]
    fn test_error_source_is_none_for_api_errors() {
        use std::error::Error;
        let err = CfError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}

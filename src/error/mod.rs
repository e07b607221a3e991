//! Error types for the Hirelink client

use thiserror::Error;

mod payload;

pub use payload::{ErrorPayload, FieldError, UNKNOWN_ERROR_MESSAGE, format_error};

/// Result type alias for Hirelink operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// One human-readable line suitable for a banner or an inline message.
    ///
    /// Server-reported errors go through [`format_error`]; transport failures
    /// collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api(api) => api.user_message(),
            other => other.to_string(),
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("{payload}")]
    Server { status: u16, payload: ErrorPayload },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// HTTP status reported by the server, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials attached to the request.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Display string for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { payload, .. } => format_error(payload),
            ApiError::Network(_) | ApiError::Timeout => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not logged in. Run `hirelink login` first.")]
    NotLoggedIn,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Failure to decode a bearer token into its claims
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed token: expected 3 segments, found {0}")]
    Segments(usize),

    #[error("Malformed token payload encoding: {0}")]
    Encoding(String),

    #[error("Malformed token claims: {0}")]
    Claims(String),
}

/// Form input rejected before submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", validation_summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

fn validation_summary(errors: &[FieldError]) -> String {
    format_error(&ErrorPayload::Structured {
        message: Some("Validation failed".to_string()),
        errors: errors.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_api_error_timeout_message() {
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_api_error_server_displays_normalized_payload() {
        let err = ApiError::Server {
            status: 400,
            payload: ErrorPayload::Structured {
                message: Some("Bad input".to_string()),
                errors: vec![FieldError::new("email", "must be valid")],
            },
        };
        assert_eq!(err.to_string(), "Bad input \n Email: must be valid ");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_api_error_unauthorized() {
        let err = ApiError::Server {
            status: 401,
            payload: ErrorPayload::Message("Unauthorized".to_string()),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Timeout.is_unauthorized());
    }

    #[test]
    fn test_transport_failures_use_generic_message() {
        let msg = ApiError::Network("dns failure".to_string()).user_message();
        assert!(msg.contains("Unable to reach the server"));
        assert_eq!(msg, ApiError::Timeout.user_message());
    }

    #[test]
    fn test_api_error_invalid_response() {
        let err = ApiError::InvalidResponse("Missing field 'id'".to_string());
        assert!(err.to_string().contains("Missing field"));
    }

    #[test]
    fn test_config_error_not_logged_in() {
        let err = ConfigError::NotLoggedIn;
        assert!(err.to_string().contains("hirelink login"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = ValidationError::new(vec![
            FieldError::new("email", "is required"),
            FieldError::new("password", "must be at least 8 characters"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed \n Email: is required, password: must be at least 8 characters "
        );
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Timeout.into();
        match err {
            Error::Api(ApiError::Timeout) => (),
            _ => panic!("Expected Error::Api(ApiError::Timeout)"),
        }
    }

    #[test]
    fn test_user_message_for_non_api_errors() {
        let err = Error::Other("Custom error".to_string());
        assert!(err.user_message().contains("Custom error"));
    }
}

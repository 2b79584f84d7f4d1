use reqwest::StatusCode;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Invalid filter or input values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or expired credentials (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx reply from the backend
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    /// Backend answered 2xx but reported `success: false`
    #[error("API error: {0}")]
    Api(String),

    /// Connection-level failure before a response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        AppError::Api(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Map a non-success HTTP status and its body to the matching variant
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(body),
            StatusCode::FORBIDDEN => AppError::Forbidden(body),
            StatusCode::NOT_FOUND => AppError::NotFound(body),
            _ => AppError::Server {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// True for the authorization-failure class (expired/missing token, denied role)
    pub fn is_authorization(&self) -> bool {
        matches!(self, AppError::Unauthorized(_) | AppError::Forbidden(_))
    }

    /// Human-readable message shown to the operator in a notification
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized(_) => {
                "Your session is invalid or has expired, please sign in again.".to_string()
            }
            AppError::Forbidden(_) => "You do not have permission to access this.".to_string(),
            AppError::NotFound(_) => "The requested resource was not found.".to_string(),
            AppError::Server { status, body } => format!("Server error: {} - {}", status, body),
            AppError::Api(msg) => msg.clone(),
            AppError::Transport(_) | AppError::HttpClient(_) => {
                "Could not connect to the ticket service.".to_string()
            }
            AppError::Json(_) => "The ticket service returned an unreadable response.".to_string(),
            AppError::Validation(msg) | AppError::Configuration(msg) => msg.clone(),
            AppError::Internal(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

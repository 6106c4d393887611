/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules (fee rates, thresholds)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Backend returned a non-success response
    #[error("Backend error: {0}")]
    Backend(String),

    /// Session was rejected by the backend
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP client errors (transport-level failures)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        AppError::Backend(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    /// True for errors that should send the user back through login
    /// rather than a retry prompt.
    pub fn is_session_expiry(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

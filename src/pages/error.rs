//! Page error types with HTTP status code mapping

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Record not found (404)
    NotFound,
    /// Store or data fault (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Page error with code and message
///
/// For `NotFound` the message is shown to the client; for `Internal` it is
/// only logged.
#[derive(Debug, Clone)]
pub struct PageError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl PageError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }

    /// Whether this is a not-found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for PageError {}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(format!("{err:#}"))
    }
}

impl From<crate::domain::models::DateError> for PageError {
    fn from(err: crate::domain::models::DateError) -> Self {
        Self::internal(err.to_string())
    }
}

use thiserror::Error;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure to find the order a refund document should read from.
///
/// Downstream values would be meaningless without the origin order, so these
/// are always surfaced to the caller instead of degrading to empty output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Refund record carries no parent reference
    #[error("refund {refund_id} has no parent order reference")]
    MissingParent { refund_id: i64 },

    /// Parent reference points at an order the repository does not know
    #[error("parent order {parent_id} of refund {refund_id} could not be found")]
    ParentNotFound { refund_id: i64, parent_id: i64 },

    /// Parent of a refund is itself a refund
    #[error("parent order {parent_id} of refund {refund_id} is itself a refund")]
    NestedRefund { refund_id: i64, parent_id: i64 },

    /// The order repository failed while loading the parent
    #[error("failed to load parent order {parent_id}: {message}")]
    Lookup { parent_id: i64, message: String },
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Refund origin could not be resolved
    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// Validation errors for settings and input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File access errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Whether this error came from refund origin resolution
    pub fn is_resolution(&self) -> bool {
        matches!(self, AppError::Resolution(_))
    }
}

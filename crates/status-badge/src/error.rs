//! Error types for badge configuration and status documents

/// Errors raised while loading configuration or reading status documents.
///
/// Formatting itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown badge category: {0}")]
    UnknownCategory(String),

    #[error("Invalid status document: {0}")]
    StatusDocument(String),
}

/// Result type alias for badge operations
pub type Result<T> = std::result::Result<T, BadgeError>;

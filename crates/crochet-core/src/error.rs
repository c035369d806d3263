//! Catalogue Errors
//!
//! One error enum for every fallible catalogue operation.

/// Common result type for catalogue operations
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Catalogue-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// No pattern with this key in the store
    PatternNotFound(String),
    /// Step index outside the pattern's steps
    InvalidStep { pattern: String, step: usize },
    /// A data document could not be decoded
    Parse(String),
    /// Durable storage rejected a read or write
    Storage(String),
    /// A form field failed its validity check
    Validation(String),
}

impl std::fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogueError::PatternNotFound(key) => write!(f, "Pattern not found: {}", key),
            CatalogueError::InvalidStep { pattern, step } => {
                write!(f, "Invalid step {} for pattern {}", step, pattern)
            }
            CatalogueError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CatalogueError::Storage(msg) => write!(f, "Storage error: {}", msg),
            CatalogueError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogueError {}

impl From<serde_json::Error> for CatalogueError {
    fn from(err: serde_json::Error) -> Self {
        CatalogueError::Parse(format!("JSON error: {}", err))
    }
}

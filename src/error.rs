//! Error types for the cosmic court

use thiserror::Error;

/// Main error type for the cosmic court
#[derive(Error, Debug)]
pub enum CourtError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid keyword pattern: {0}")]
    KeywordPattern(#[from] regex::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Case not found: {0}")]
    CaseNotFound(usize),

    #[error("Session aborted: {0}")]
    SessionAborted(String),
}

/// Result type alias for the cosmic court
pub type Result<T> = std::result::Result<T, CourtError>;

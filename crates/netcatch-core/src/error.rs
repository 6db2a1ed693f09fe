//! Error types for configuration and contract violations.

/// Errors surfaced by the core vocabulary.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// A level outside `1..=MAX_LEVEL` was requested.
    #[error("level {0} is outside 1..=10")]
    LevelOutOfRange(u8),

    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration JSON could not be parsed.
    #[error("Parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, GameError>;

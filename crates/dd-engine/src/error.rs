//! Error types for the dashboard engine.

use dd_core::CoreError;

/// Errors that can occur while generating or summarizing character data.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A range, attribute, or category list failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The generator was given no character classes to choose from.
    #[error("no character classes to choose from")]
    NoCategories,

    /// A configuration value is out of bounds.
    #[error("invalid config: {0}")]
    Config(String),

    /// A configuration file could not be parsed.
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Whether this error is caused by invalid caller input (bad range,
    /// missing range, empty category list) rather than by the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Core(_) | Self::NoCategories | Self::Config(_))
    }
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

use crate::attribute::Attribute;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or validating the data model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A range whose lower bound exceeds its upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },

    /// A required attribute has no range configured.
    #[error("no range configured for {0}")]
    MissingRange(Attribute),

    /// A range string that could not be parsed.
    #[error("cannot parse range \"{0}\" (expected MIN..MAX, MIN-MAX or MIN,MAX)")]
    ParseRange(String),
}

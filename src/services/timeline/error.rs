use thiserror::Error;

/// Errors raised while turning host data into timeline input.
///
/// Rendering itself never fails; these only surface from parsing helpers and
/// configuration checks.
#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("invalid clock time '{0}', expected HH:MM")]
    InvalidClock(String),

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid timeline configuration: {0}")]
    InvalidConfig(String),
}

pub type TimelineResult<T> = Result<T, TimelineError>;

use thiserror::Error;

/// Failure to read a room descriptor out of a container label set.
///
/// Every variant means the stored labels are damaged or were written by an incompatible producer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("damaged container labels: {0} not found")]
    MissingField(&'static str),

    #[error("damaged container labels: {key}={value:?} is invalid: {reason}")]
    Parse {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid port range: min {min} is greater than max {max}")]
    InvalidRange { min: u16, max: u16 },

    #[error("unknown constraint action: {0}")]
    UnknownAction(String),
}

pub type LabelResult<T> = Result<T, LabelError>;

use rooms_model::LabelError;
use thiserror::Error;

use crate::runtime::RuntimeError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Labels(#[from] LabelError),

    #[error("container not found: {0}")]
    NotFound(String),

    #[error("container {id} does not belong to instance '{instance}'")]
    NotOwned { id: String, instance: String },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("invalid creation timestamp for container {id}: {created}")]
    InvalidTimestamp { id: String, created: i64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

use service_common::error::ClientError;
use thiserror::Error;

/// Enumeration of errors that stop the reminder binary.
#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("invalid configuration: {0}")]
    ConfigError(#[from] envconfig::Error),
    #[error("resident lookup failed")]
    LookupError(#[from] ClientError),
    #[error("failed to write resident to stdout")]
    OutputError(#[from] std::io::Error),
    #[error("failed to serialize resident")]
    SerializeError(#[from] serde_json::Error),
}

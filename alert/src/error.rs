use service_common::error::ClientError;
use thiserror::Error;

/// Enumeration of errors that stop the alert binary.
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("invalid configuration: {0}")]
    ConfigError(#[from] envconfig::Error),
    #[error("event lookup failed")]
    LookupError(#[from] ClientError),
    #[error("failed to write event to stdout")]
    OutputError(#[from] std::io::Error),
    #[error("failed to serialize event")]
    SerializeError(#[from] serde_json::Error),
}

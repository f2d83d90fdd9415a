use http::StatusCode;
use thiserror::Error;

use crate::discovery::DiscoveryError;

/// Enumeration of errors returned by a lookup against a sibling service.
/// None of these are retried: callers decide whether to handle or propagate them.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error("lookup ids must not be empty or a dot segment")]
    InvalidId,
    #[error("base url {0} cannot be extended with a path")]
    InvalidUrl(String),
    #[error("could not reach the {service} service: {source}")]
    ConnectionFailure {
        service: String,
        source: reqwest::Error,
    },
    #[error("{id} was not found by the {service} service")]
    NotFound { service: String, id: String },
    #[error("the {service} service responded with unexpected status {status}")]
    UnexpectedStatus { service: String, status: StatusCode },
    #[error("response from the {service} service could not be decoded: {source}")]
    DecodeFailure {
        service: String,
        source: serde_json::Error,
    },
}

impl ClientError {
    /// A short, stable label for the error class. Used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Discovery(_) => "discovery",
            ClientError::InvalidId => "invalid_id",
            ClientError::InvalidUrl(_) => "invalid_url",
            ClientError::ConnectionFailure { .. } => "connection",
            ClientError::NotFound { .. } => "not_found",
            ClientError::UnexpectedStatus { .. } => "unexpected_status",
            ClientError::DecodeFailure { .. } => "decode",
        }
    }
}

/// Enumeration of errors when building a `PathTemplate`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("path template {0:?} must contain exactly one {{placeholder}} segment")]
    PlaceholderCount(String),
    #[error("path template {0:?} has a malformed placeholder segment")]
    MalformedPlaceholder(String),
}

use crate::wire::ResponseCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    EncodingError(String),

    #[error("Read of {needed} byte(s) at offset {offset} exceeds message length {len}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Unexpected response: this message is not a response")]
    NotAResponse,

    #[error("The class field in the response is not 1 (got {0})")]
    UnsupportedClass(u16),

    #[error("Unsupported query type: {0}")]
    UnsupportedType(String),

    #[error("{}", .0.description())]
    ServerStatus(ResponseCode),

    #[error("Domain not found (NXDOMAIN)")]
    NameNotFound,

    #[error("Response type {received} is not consistent with the requested type {requested}")]
    QuestionMismatch { requested: String, received: String },

    #[error("Transaction ID mismatch: expected {expected:#06x}, received {received:#06x}")]
    IdMismatch { expected: u16, received: u16 },

    #[error("Timeout occurred")]
    QueryTimeout,

    #[error("Maximum number of retries {0} exceeded")]
    MaxRetriesExceeded(u32),

    #[error("Transport error: {0}")]
    TransportError(String),
}

impl DomainError {
    /// Only transport timeouts are worth another attempt; everything else is a
    /// protocol violation or a definitive answer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::QueryTimeout)
    }
}

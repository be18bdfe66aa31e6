//! DNS client domain layer: record types, errors, configuration and the
//! wire-format codec.
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, ClientConfig, ConfigError};
pub use dns_record::{QueryType, RData, RecordType, ResourceRecord};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use wire::{Header, RcodeStatus, Response, ResponseCode};

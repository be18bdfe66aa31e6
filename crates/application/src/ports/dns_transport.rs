use async_trait::async_trait;
use dns_client_domain::DomainError;
use std::time::Duration;

/// Datagram exchange with a single upstream server.
///
/// Implementations own the socket lifecycle; the codec only ever sees the
/// byte buffers passed through here.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(&self, message: &[u8]) -> Result<(), DomainError>;

    /// Waits at most `timeout` for the next datagram.
    ///
    /// Expiry must be reported as [`DomainError::QueryTimeout`]; that is the
    /// only error the resolver retries.
    async fn receive(&self, timeout: Duration) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

//! UDP transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is with no framing. Without EDNS(0) a response is
//! limited to 512 bytes; anything longer is cut off by the receive buffer.

use async_trait::async_trait;
use dns_client_application::ports::DnsTransport;
use dns_client_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size without EDNS(0)
pub const MAX_UDP_RESPONSE_SIZE: usize = 512;

/// DNS over UDP transport bound to a single server
pub struct UdpTransport {
    socket: UdpSocket,
    server_addr: SocketAddr,
}

impl UdpTransport {
    /// Binds an ephemeral local port and connects it to `server_addr`, so
    /// datagrams from any other peer are dropped by the OS.
    pub async fn connect(server_addr: SocketAddr) -> Result<Self, DomainError> {
        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::TransportError(format!("Failed to bind UDP socket: {}", e))
        })?;

        socket.connect(server_addr).await.map_err(|e| {
            DomainError::TransportError(format!(
                "Failed to connect UDP socket to {}: {}",
                server_addr, e
            ))
        })?;

        debug!(
            server = %server_addr,
            local = ?socket.local_addr().ok(),
            "UDP socket ready"
        );

        Ok(Self {
            socket,
            server_addr,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(&self, message: &[u8]) -> Result<(), DomainError> {
        let bytes_sent = self.socket.send(message).await.map_err(|e| {
            DomainError::TransportError(format!(
                "Failed to send UDP query to {}: {}",
                self.server_addr, e
            ))
        })?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");
        Ok(())
    }

    async fn receive(&self, timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = tokio::time::timeout(timeout, self.socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::TransportError(format!(
                    "Failed to receive UDP response from {}: {}",
                    self.server_addr, e
                ))
            })?;

        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "UDP response received");
        Ok(recv_buf)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

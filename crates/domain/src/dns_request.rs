use super::QueryType;
use std::net::SocketAddr;
use std::sync::Arc;

/// One lookup to perform: which name, which type, against which server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub query_type: QueryType,
    pub server: SocketAddr,
}

impl DnsRequest {
    pub fn new(domain: impl Into<Arc<str>>, query_type: QueryType, server: SocketAddr) -> Self {
        Self {
            domain: domain.into(),
            query_type,
            server,
        }
    }
}

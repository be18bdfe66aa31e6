mod dns_transport;
mod retry_listener;

pub use dns_transport::DnsTransport;
pub use retry_listener::RetryListener;

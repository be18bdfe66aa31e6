use super::errors::ConfigError;
use std::net::Ipv4Addr;

/// Parses the `@a.b.c.d` server argument into an IPv4 address.
///
/// The leading `@` is optional here; exactly four dot-separated decimal
/// components in 0..=255 are required.
pub fn parse_server(arg: &str) -> Result<Ipv4Addr, ConfigError> {
    let raw = arg.strip_prefix('@').unwrap_or(arg);
    let invalid = |reason: &str| ConfigError::InvalidServer(arg.to_string(), reason.to_string());

    let components: Vec<&str> = raw.split('.').collect();
    if components.len() != 4 {
        return Err(invalid("the IP address must have exactly 4 components"));
    }

    let mut octets = [0u8; 4];
    for (octet, component) in octets.iter_mut().zip(&components) {
        if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("each IP component must be a decimal number"));
        }
        *octet = component
            .parse::<u8>()
            .map_err(|_| invalid("each IP component must be <= 255 and >= 0"))?;
    }

    Ok(Ipv4Addr::from(octets))
}

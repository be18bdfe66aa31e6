mod logging;

pub use logging::init_logging;

use dns_client_domain::{CliOverrides, ClientConfig};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<ClientConfig> {
    Ok(ClientConfig::load(path, overrides)?)
}

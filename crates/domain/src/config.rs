mod errors;
mod logging;
mod query;
mod root;
mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use root::{CliOverrides, ClientConfig};
pub use server::parse_server;

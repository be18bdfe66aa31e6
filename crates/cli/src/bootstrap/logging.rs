use dns_client_domain::ClientConfig;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the report.
pub fn init_logging(config: &ClientConfig) {
    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

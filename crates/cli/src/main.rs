use clap::Parser;
use dns_client_application::use_cases::{ResolveDomainUseCase, RetryPolicy};
use dns_client_application::Report;
use dns_client_domain::config::parse_server;
use dns_client_domain::{CliOverrides, DnsRequest, DomainError, QueryType};
use dns_client_infrastructure::dns::UdpTransport;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

mod bootstrap;
mod console;

use console::ConsoleRetryListener;

#[derive(Parser, Debug)]
#[command(name = "dnsclient")]
#[command(version = "0.1.0")]
#[command(about = "Sends a single DNS query over UDP and prints the answer")]
struct Cli {
    /// Seconds to wait for each response
    #[arg(short = 't', long = "timeout")]
    timeout: Option<u64>,

    /// Retransmissions after a timeout
    #[arg(short = 'r', long = "max-retries")]
    max_retries: Option<u32>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Query for mail exchange records
    #[arg(long, conflicts_with = "ns")]
    mx: bool,

    /// Query for name server records
    #[arg(long)]
    ns: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Server IPv4 address, written as @a.b.c.d
    #[arg(value_name = "@SERVER")]
    server: String,

    /// Domain name to resolve
    name: String,
}

impl Cli {
    fn record_type(&self) -> Option<QueryType> {
        if self.mx {
            Some(QueryType::MX)
        } else if self.ns {
            Some(QueryType::NS)
        } else {
            None
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            timeout_secs: self.timeout,
            max_retries: self.max_retries,
            port: self.port,
            record_type: self.record_type(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            console::print_error(e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if !cli.server.starts_with('@') {
        anyhow::bail!(
            "Incorrect input syntax: Please use the following Syntax: \
             [-t timeout] [-r max-retries] [-p port] [--mx|--ns] @server name"
        );
    }
    if cli.name.is_empty() {
        anyhow::bail!("Incorrect input syntax: server IP address or domain name is missing");
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    let server_ip = parse_server(&cli.server)?;
    let server = SocketAddr::from((server_ip, config.query.port));
    let request = DnsRequest::new(cli.name.as_str(), config.query.record_type, server);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        timeout_secs = config.query.timeout_secs,
        max_retries = config.query.max_retries,
        "Starting DNS client"
    );

    console::print_request(&request, server_ip);

    let transport = Arc::new(UdpTransport::connect(server).await?);
    let policy = RetryPolicy {
        timeout: config.query.timeout(),
        max_retries: config.query.max_retries,
    };
    let use_case =
        ResolveDomainUseCase::new(transport, policy).with_retry_listener(Arc::new(ConsoleRetryListener));

    match use_case.execute(&request).await {
        Ok(resolution) => {
            let report = Report::from_response(&resolution.response);
            console::print_resolution(&resolution, &report);
            debug!(id = resolution.query_id, attempts = resolution.attempts, "Done");
            Ok(match report {
                Report::ServerError(_) => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            })
        }
        Err(e @ DomainError::MaxRetriesExceeded(_)) => {
            console::print_error("Timeout occurred");
            console::print_error(e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            console::print_error(e);
            Ok(ExitCode::FAILURE)
        }
    }
}

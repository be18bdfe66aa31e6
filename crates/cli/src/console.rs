use dns_client_application::ports::RetryListener;
use dns_client_application::use_cases::Resolution;
use dns_client_application::Report;
use dns_client_domain::DnsRequest;
use std::net::Ipv4Addr;

pub fn print_request(request: &DnsRequest, server: Ipv4Addr) {
    println!("DnsClient sending request for {}", request.domain);
    println!("Server: {}", server);
    println!("Request type: {}", request.query_type);
}

pub fn print_resolution(resolution: &Resolution, report: &Report) {
    println!(
        "Response received after {:.3} seconds ({} retries)",
        resolution.elapsed.as_secs_f64(),
        resolution.retries
    );
    println!();
    for line in report.lines() {
        println!("{}", line);
    }
}

pub fn print_error(message: impl std::fmt::Display) {
    println!("ERROR\t{}", message);
}

/// Announces each retransmission as it happens.
pub struct ConsoleRetryListener;

impl RetryListener for ConsoleRetryListener {
    fn on_retry(&self, _retry: u32, retries_left: u32) {
        print_error("Timeout occurred");
        println!("Retrying the original request ({} retries left) ...", retries_left);
    }
}

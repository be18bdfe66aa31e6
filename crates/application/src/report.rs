//! Console report for a decoded response.

use dns_client_domain::{RcodeStatus, ResourceRecord, Response, ResponseCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// NXDOMAIN, or no answers at all.
    NotFound,

    /// RCODE other than success or name error; no records are shown.
    ServerError(ResponseCode),

    Records {
        answer_count: u16,
        answers: Vec<ResourceRecord>,
        additional_count: u16,
        additionals: Vec<ResourceRecord>,
    },
}

impl Report {
    pub fn from_response(response: &Response) -> Self {
        match response.classify_rcode() {
            RcodeStatus::ServerError(code) => Report::ServerError(code),
            RcodeStatus::NotFound => Report::NotFound,
            RcodeStatus::Ok if response.header.ancount == 0 => Report::NotFound,
            RcodeStatus::Ok => Report::Records {
                answer_count: response.header.ancount,
                answers: response.answers.clone(),
                additional_count: response.header.arcount,
                additionals: response.additionals.clone(),
            },
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::NotFound => vec!["NOTFOUND".to_string()],
            Report::ServerError(code) => vec![format!("ERROR\t{}", code.description())],
            Report::Records {
                answer_count,
                answers,
                additional_count,
                additionals,
            } => {
                let mut lines = vec![format!("***Answer Section ({} records)***", answer_count)];
                lines.extend(displayable(answers));
                lines.push(String::new());

                if *additional_count > 0 {
                    lines.push(format!(
                        "***Additional Section ({} records)***",
                        additional_count
                    ));
                    lines.extend(displayable(additionals));
                }
                lines
            }
        }
    }
}

/// `TYPE\tRDATA\t[PREFERENCE\t]TTL\t{auth|nonauth}`
pub fn format_record(record: &ResourceRecord) -> String {
    let auth = if record.authoritative { "auth" } else { "nonauth" };
    match record.preference() {
        Some(preference) => format!(
            "{}\t{}\t{}\t{}\t{}",
            record.record_type().report_label(),
            record.rdata,
            preference,
            record.ttl,
            auth
        ),
        None => format!(
            "{}\t{}\t{}\t{}",
            record.record_type().report_label(),
            record.rdata,
            record.ttl,
            auth
        ),
    }
}

fn displayable(records: &[ResourceRecord]) -> impl Iterator<Item = String> + '_ {
    records
        .iter()
        .filter(|r| r.is_displayable())
        .map(format_record)
}

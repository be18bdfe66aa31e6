//! Whole-message assembly and the response walker.

use super::header::{Header, RcodeStatus, HEADER_LEN};
use super::question::Question;
use super::reader::WireReader;
use super::record::decode_record;
use crate::dns_record::{QueryType, ResourceRecord};
use crate::errors::DomainError;
use tracing::trace;

/// Largest message carried over plain UDP (RFC 1035 §4.2.1).
pub const MAX_MESSAGE_LEN: usize = 512;

/// Builds a recursive query for `name` with a single question.
pub fn build_query(name: &str, qtype: QueryType, id: u16) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(MAX_MESSAGE_LEN);
    buf.extend_from_slice(&Header::query(id).encode());
    Question::new(name, qtype).encode_into(&mut buf)?;

    if buf.len() > MAX_MESSAGE_LEN {
        return Err(DomainError::EncodingError(format!(
            "query is {} bytes (max {})",
            buf.len(),
            MAX_MESSAGE_LEN
        )));
    }
    Ok(buf)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub header: Header,

    /// QTYPE echoed in the question section, if present and recognised.
    pub question_type: Option<QueryType>,

    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Response {
    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn is_authoritative(&self) -> bool {
        self.header.aa
    }

    pub fn classify_rcode(&self) -> RcodeStatus {
        self.header.classify_rcode()
    }

    /// Maps the RCODE and answer count onto the error kinds a caller reports.
    pub fn status(&self) -> Result<(), DomainError> {
        match self.classify_rcode() {
            RcodeStatus::NotFound => Err(DomainError::NameNotFound),
            RcodeStatus::ServerError(code) => Err(DomainError::ServerStatus(code)),
            RcodeStatus::Ok if self.header.ancount == 0 => Err(DomainError::NameNotFound),
            RcodeStatus::Ok => Ok(()),
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authorities.iter())
            .chain(self.additionals.iter())
    }
}

/// Parses a full response whose question section occupies `question_len`
/// bytes right after the header (the length of the question this client sent).
pub fn parse_response(buf: &[u8], question_len: usize) -> Result<Response, DomainError> {
    let header = Header::decode(buf)?;

    let mut reader = WireReader::at(buf, HEADER_LEN);
    let question_type = match header.qdcount {
        0 => None,
        1 => Question::decode_qtype(reader.read_bytes(question_len)?),
        n => {
            return Err(DomainError::MalformedMessage(format!(
                "response carries {} questions, expected 1",
                n
            )));
        }
    };

    let authoritative = header.aa;
    let mut cursor = reader.position();
    let answers = walk_section(buf, &mut cursor, header.ancount, authoritative)?;
    let authorities = walk_section(buf, &mut cursor, header.nscount, authoritative)?;
    let additionals = walk_section(buf, &mut cursor, header.arcount, authoritative)?;

    trace!(
        id = header.id,
        answers = answers.len(),
        authorities = authorities.len(),
        additionals = additionals.len(),
        consumed = cursor,
        "DNS response walked"
    );

    Ok(Response {
        header,
        question_type,
        answers,
        authorities,
        additionals,
    })
}

fn walk_section(
    buf: &[u8],
    cursor: &mut usize,
    count: u16,
    authoritative: bool,
) -> Result<Vec<ResourceRecord>, DomainError> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (record, next) = decode_record(buf, *cursor, authoritative)?;
        if next < *cursor {
            return Err(DomainError::MalformedMessage(format!(
                "record cursor moved backwards from {} to {}",
                cursor, next
            )));
        }
        *cursor = next;
        records.push(record);
    }
    Ok(records)
}

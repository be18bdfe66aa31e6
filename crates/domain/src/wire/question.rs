//! Question section entry (RFC 1035 §4.1.2). Always a single question, class IN.

use super::name::encode_name_into;
use crate::dns_record::QueryType;
use crate::errors::DomainError;

/// The Internet class, the only one this client asks for or accepts.
pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: QueryType,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: QueryType) -> Self {
        Self {
            name: name.into(),
            qtype,
        }
    }

    /// Builds a question from a raw QTYPE code, rejecting anything but A, NS and MX.
    pub fn from_type_code(name: impl Into<String>, code: u16) -> Result<Self, DomainError> {
        let qtype = QueryType::from_u16(code)
            .ok_or_else(|| DomainError::UnsupportedType(format!("QTYPE {}", code)))?;
        Ok(Self::new(name, qtype))
    }

    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(self.name.len() + 6);
        self.encode_into(&mut buf)?;
        Ok(buf)
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        encode_name_into(&self.name, buf)?;
        buf.extend_from_slice(&self.qtype.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        Ok(())
    }

    /// Reads the QTYPE from the last four bytes of an echoed question.
    ///
    /// The name part is not decoded: it is the client's own request echoed
    /// back. Returns `None` for a short slice or an unknown QTYPE.
    pub fn decode_qtype(bytes: &[u8]) -> Option<QueryType> {
        let tail = bytes.len().checked_sub(4).map(|start| &bytes[start..])?;
        QueryType::from_u16(u16::from_be_bytes([tail[0], tail[1]]))
    }
}

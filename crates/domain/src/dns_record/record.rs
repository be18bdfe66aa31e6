use super::RecordType;
use std::fmt;
use std::net::Ipv4Addr;

/// RDATA of a resource record, interpreted according to its TYPE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Ns(String),
    Cname(String),
    Mx { preference: u16, exchange: String },
    Other { type_code: u16, data: Vec<u8> },
}

impl RData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RData::A(_) => RecordType::A,
            RData::Ns(_) => RecordType::NS,
            RData::Cname(_) => RecordType::CNAME,
            RData::Mx { .. } => RecordType::MX,
            RData::Other { type_code, .. } => RecordType::Other(*type_code),
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::Ns(name) | RData::Cname(name) => write!(f, "{}", name),
            RData::Mx { exchange, .. } => write!(f, "{}", exchange),
            RData::Other { data, .. } => write!(f, "<{} bytes>", data.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub ttl: i32,

    /// RDLENGTH as declared on the wire. Only used to skip unknown types.
    pub rdlength: u16,

    pub rdata: RData,

    /// AA bit of the message this record came from.
    pub authoritative: bool,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, ttl: i32, rdata: RData, authoritative: bool) -> Self {
        Self {
            name: name.into(),
            ttl,
            rdlength: 0,
            rdata,
            authoritative,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.rdata.record_type()
    }

    pub fn is_displayable(&self) -> bool {
        !self.record_type().is_other()
    }

    pub fn preference(&self) -> Option<u16> {
        match &self.rdata {
            RData::Mx { preference, .. } => Some(*preference),
            _ => None,
        }
    }
}

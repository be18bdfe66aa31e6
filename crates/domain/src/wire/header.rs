//! Fixed 12-byte message header (RFC 1035 §4.1.1).

use super::reader::WireReader;
use crate::errors::DomainError;

pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    pub fn from_u8(value: u8) -> Self {
        match value & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn description(&self) -> String {
        match self {
            ResponseCode::NoError => "No error condition".to_string(),
            ResponseCode::FormatError => {
                "Format error: the name server was unable to interpret the query".to_string()
            }
            ResponseCode::ServerFailure => "Server failure: the name server was unable to process this query due to a problem with the name server".to_string(),
            ResponseCode::NameError => {
                "Name error: the domain name referenced in the query does not exist".to_string()
            }
            ResponseCode::NotImplemented => {
                "Not implemented: the name server does not support the requested kind of query"
                    .to_string()
            }
            ResponseCode::Refused => "Refused: the name server refuses to perform the requested operation for policy reasons".to_string(),
            ResponseCode::Unknown(code) => format!("Unknown response code {}", code),
        }
    }
}

/// Outcome of a response as signalled by its RCODE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RcodeStatus {
    Ok,
    NotFound,
    ServerError(ResponseCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Standard recursive query header carrying a single question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            rd: true,
            qdcount: 1,
            ..Self::default()
        }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..2].copy_from_slice(&self.id.to_be_bytes());
        buf[2] = (self.qr as u8) << 7
            | (self.opcode & 0x0F) << 3
            | (self.aa as u8) << 2
            | (self.tc as u8) << 1
            | self.rd as u8;
        buf[3] = (self.ra as u8) << 7 | (self.z & 0x07) << 4 | (self.rcode & 0x0F);
        buf[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        buf[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        buf[8..10].copy_from_slice(&self.nscount.to_be_bytes());
        buf[10..12].copy_from_slice(&self.arcount.to_be_bytes());
        buf
    }

    /// Decodes the header at the start of `buf`, which must be a response.
    pub fn decode(buf: &[u8]) -> Result<Self, DomainError> {
        let mut reader = WireReader::new(buf);
        let id = reader.read_u16()?;
        let flags_hi = reader.read_u8()?;
        let flags_lo = reader.read_u8()?;

        let header = Self {
            id,
            qr: flags_hi & 0x80 != 0,
            opcode: (flags_hi >> 3) & 0x0F,
            aa: flags_hi & 0x04 != 0,
            tc: flags_hi & 0x02 != 0,
            rd: flags_hi & 0x01 != 0,
            ra: flags_lo & 0x80 != 0,
            z: (flags_lo >> 4) & 0x07,
            rcode: flags_lo & 0x0F,
            qdcount: reader.read_u16()?,
            ancount: reader.read_u16()?,
            nscount: reader.read_u16()?,
            arcount: reader.read_u16()?,
        };

        if !header.qr {
            return Err(DomainError::NotAResponse);
        }
        Ok(header)
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_u8(self.rcode)
    }

    pub fn classify_rcode(&self) -> RcodeStatus {
        match self.response_code() {
            ResponseCode::NoError => RcodeStatus::Ok,
            ResponseCode::NameError => RcodeStatus::NotFound,
            other => RcodeStatus::ServerError(other),
        }
    }

    /// Total records declared after the question section.
    pub fn record_count(&self) -> usize {
        self.ancount as usize + self.nscount as usize + self.arcount as usize
    }
}

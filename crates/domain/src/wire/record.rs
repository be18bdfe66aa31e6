//! Resource record decoding (RFC 1035 §4.1.3).

use super::name::decode_name;
use super::question::CLASS_IN;
use super::reader::WireReader;
use crate::dns_record::{RData, RecordType, ResourceRecord};
use crate::errors::DomainError;
use std::net::Ipv4Addr;

/// Decodes the resource record starting at `offset`.
///
/// The returned offset is advanced by what each RDATA variant actually
/// consumes; RDLENGTH is only trusted to step over types this client does
/// not interpret.
pub fn decode_record(
    buf: &[u8],
    offset: usize,
    authoritative: bool,
) -> Result<(ResourceRecord, usize), DomainError> {
    let (name, after_name) = decode_name(buf, offset)?;
    let mut reader = WireReader::at(buf, after_name);

    let record_type = RecordType::from_u16(reader.read_u16()?);
    let class = reader.read_u16()?;
    if class != CLASS_IN {
        return Err(DomainError::UnsupportedClass(class));
    }
    let ttl = reader.read_i32()?;
    let rdlength = reader.read_u16()?;

    let rdata = match record_type {
        RecordType::A => {
            let octets = reader.read_bytes(4)?;
            RData::A(Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]))
        }
        RecordType::NS => RData::Ns(read_name(&mut reader)?),
        RecordType::CNAME => RData::Cname(read_name(&mut reader)?),
        RecordType::MX => {
            let preference = reader.read_u16()?;
            let exchange = read_name(&mut reader)?;
            RData::Mx {
                preference,
                exchange,
            }
        }
        RecordType::Other(type_code) => RData::Other {
            type_code,
            data: reader.read_bytes(rdlength as usize)?.to_vec(),
        },
    };

    let record = ResourceRecord {
        name,
        ttl,
        rdlength,
        rdata,
        authoritative,
    };
    Ok((record, reader.position()))
}

fn read_name(reader: &mut WireReader<'_>) -> Result<String, DomainError> {
    let (name, next) = decode_name(reader.buffer(), reader.position())?;
    reader.seek(next)?;
    Ok(name)
}

//! Domain name encoding and decompression (RFC 1035 §3.1, §4.1.4).

use super::reader::WireReader;
use crate::errors::DomainError;

/// Longest label allowed on the wire.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, length bytes and terminator included.
pub const MAX_NAME_LEN: usize = 255;

/// Upper bound on compression pointers followed while decoding one name.
const MAX_POINTER_HOPS: usize = 64;

const POINTER_MASK: u8 = 0xC0;

/// Encodes a dotted name as length-prefixed labels followed by a zero byte.
///
/// A single trailing dot (fully qualified form) is accepted and ignored.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(name.len() + 2);
    encode_name_into(name, &mut buf)?;
    Ok(buf)
}

pub fn encode_name_into(name: &str, buf: &mut Vec<u8>) -> Result<(), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err(DomainError::EncodingError("domain name is empty".to_string()));
    }

    let start = buf.len();
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::EncodingError(format!(
                "empty label in '{}'",
                name
            )));
        }
        if !label.is_ascii() {
            return Err(DomainError::EncodingError(format!(
                "label '{}' contains non-ASCII characters",
                label
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::EncodingError(format!(
                "label '{}' is {} bytes long (max {})",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);

    let encoded_len = buf.len() - start;
    if encoded_len > MAX_NAME_LEN {
        buf.truncate(start);
        return Err(DomainError::EncodingError(format!(
            "name '{}' encodes to {} bytes (max {})",
            name, encoded_len, MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Decodes the (possibly compressed) name starting at `offset`.
///
/// Returns the dotted name and the offset just past the name's own bytes:
/// when the name ends in a pointer, that is the byte after the two pointer
/// bytes, not the end of the pointed-to labels. The root name decodes to "".
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut hops = Vec::new();
    decode_from(buf, offset, &mut hops)
}

fn decode_from(
    buf: &[u8],
    offset: usize,
    hops: &mut Vec<usize>,
) -> Result<(String, usize), DomainError> {
    let mut reader = WireReader::at(buf, offset);
    let mut name = String::new();

    loop {
        let len = reader.peek_u8()?;

        if len == 0 {
            reader.read_u8()?;
            break;
        }

        match len & POINTER_MASK {
            POINTER_MASK => {
                let pointer_at = reader.position();
                let target = (reader.read_u16()? & 0x3FFF) as usize;
                if target >= pointer_at {
                    return Err(DomainError::MalformedMessage(format!(
                        "compression pointer at {} targets non-preceding offset {}",
                        pointer_at, target
                    )));
                }
                if hops.contains(&target) || hops.len() >= MAX_POINTER_HOPS {
                    return Err(DomainError::MalformedMessage(format!(
                        "compression pointer loop at offset {}",
                        pointer_at
                    )));
                }
                hops.push(target);

                let (suffix, _) = decode_from(buf, target, hops)?;
                if !suffix.is_empty() {
                    if !name.is_empty() {
                        name.push('.');
                    }
                    name.push_str(&suffix);
                }
                break;
            }
            0x00 => {
                reader.read_u8()?;
                let label = reader.read_bytes(len as usize)?;
                if !name.is_empty() {
                    name.push('.');
                }
                // Latin-1: every byte maps to the code point of the same value.
                name.extend(label.iter().map(|&b| b as char));
            }
            _ => {
                return Err(DomainError::MalformedMessage(format!(
                    "reserved label type {:#04x} at offset {}",
                    len,
                    reader.position()
                )));
            }
        }
    }

    if encoded_len(&name) > MAX_NAME_LEN {
        return Err(DomainError::MalformedMessage(format!(
            "decoded name exceeds {} bytes",
            MAX_NAME_LEN
        )));
    }

    Ok((name, reader.position()))
}

fn encoded_len(name: &str) -> usize {
    if name.is_empty() {
        1
    } else {
        name.chars().count() + 2
    }
}

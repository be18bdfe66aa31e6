//! DNS wire-format codec.
//!
//! Encoding covers what a stub client sends (header + one question); decoding
//! covers a full response with name compression. All functions work on plain
//! byte slices and never retain them.

mod header;
mod message;
mod name;
mod question;
mod reader;
mod record;

pub use header::{Header, RcodeStatus, ResponseCode, HEADER_LEN};
pub use message::{build_query, parse_response, Response, MAX_MESSAGE_LEN};
pub use name::{decode_name, encode_name, encode_name_into, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use question::{Question, CLASS_IN};
pub use reader::WireReader;
pub use record::decode_record;

#![allow(dead_code)]

use dns_client_domain::wire::encode_name;

/// Compression pointer to the question name, which always sits at offset 12.
const QNAME_POINTER: [u8; 2] = [0xC0, 0x0C];

/// Builds a response echoing the header ID and question of `query`.
pub struct ReplyBuilder {
    query: Vec<u8>,
    id: Option<u16>,
    qtype: Option<u16>,
    aa: bool,
    rcode: u8,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

pub fn reply_to(query: &[u8]) -> ReplyBuilder {
    ReplyBuilder {
        query: query.to_vec(),
        id: None,
        qtype: None,
        aa: false,
        rcode: 0,
        answers: Vec::new(),
        authorities: Vec::new(),
        additionals: Vec::new(),
    }
}

pub fn record(rtype: u16, ttl: i32, rdata: &[u8]) -> Vec<u8> {
    let mut buf = QNAME_POINTER.to_vec();
    buf.extend_from_slice(&rtype.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    buf.extend_from_slice(rdata);
    buf
}

pub fn a_record(ip: [u8; 4], ttl: i32) -> Vec<u8> {
    record(1, ttl, &ip)
}

pub fn mx_record(preference: u16, exchange: &str, ttl: i32) -> Vec<u8> {
    let mut rdata = preference.to_be_bytes().to_vec();
    rdata.extend(encode_name(exchange).unwrap());
    record(15, ttl, &rdata)
}

pub fn cname_record(target: &str, ttl: i32) -> Vec<u8> {
    record(5, ttl, &encode_name(target).unwrap())
}

impl ReplyBuilder {
    pub fn id(mut self, id: u16) -> Self {
        self.id = Some(id);
        self
    }

    /// Rewrites the echoed QTYPE.
    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = Some(qtype);
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.aa = true;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: Vec<u8>) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = self.query.clone();
        if let Some(id) = self.id {
            buf[0..2].copy_from_slice(&id.to_be_bytes());
        }
        let aa_bit = if self.aa { 0x04 } else { 0x00 };
        buf[2] = 0x80 | aa_bit | 0x01;
        buf[3] = 0x80 | (self.rcode & 0x0F);
        buf[6..8].copy_from_slice(&(self.answers.len() as u16).to_be_bytes());
        buf[8..10].copy_from_slice(&(self.authorities.len() as u16).to_be_bytes());
        buf[10..12].copy_from_slice(&(self.additionals.len() as u16).to_be_bytes());
        if let Some(qtype) = self.qtype {
            let at = buf.len() - 4;
            buf[at..at + 2].copy_from_slice(&qtype.to_be_bytes());
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            buf.extend_from_slice(record);
        }
        buf
    }
}

#![allow(dead_code)]
use dns_client_domain::wire::{encode_name, Header, Question};
use dns_client_domain::QueryType;

/// Encoded labels for `name`, terminated by the zero byte.
pub fn labels(name: &str) -> Vec<u8> {
    encode_name(name).unwrap()
}

/// Two-byte compression pointer to `offset`.
pub fn pointer(offset: u16) -> Vec<u8> {
    (0xC000 | offset).to_be_bytes().to_vec()
}

/// Raw resource record: owner name bytes, then TYPE, CLASS, TTL, RDLENGTH, RDATA.
pub struct RecordBuilder {
    owner: Vec<u8>,
    rtype: u16,
    class: u16,
    ttl: i32,
    rdlength: Option<u16>,
    rdata: Vec<u8>,
}

impl RecordBuilder {
    pub fn new(owner: Vec<u8>, rtype: u16) -> Self {
        Self {
            owner,
            rtype,
            class: 1,
            ttl: 300,
            rdlength: None,
            rdata: Vec::new(),
        }
    }

    pub fn a(owner: Vec<u8>, ip: [u8; 4]) -> Self {
        Self::new(owner, 1).rdata(ip.to_vec())
    }

    pub fn ns(owner: Vec<u8>, target: Vec<u8>) -> Self {
        Self::new(owner, 2).rdata(target)
    }

    pub fn cname(owner: Vec<u8>, target: Vec<u8>) -> Self {
        Self::new(owner, 5).rdata(target)
    }

    pub fn mx(owner: Vec<u8>, preference: u16, exchange: Vec<u8>) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend(exchange);
        Self::new(owner, 15).rdata(rdata)
    }

    pub fn class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: i32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Overrides the declared RDLENGTH, which otherwise matches the RDATA.
    pub fn rdlength(mut self, rdlength: u16) -> Self {
        self.rdlength = Some(rdlength);
        self
    }

    pub fn rdata(mut self, rdata: Vec<u8>) -> Self {
        self.rdata = rdata;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = self.owner.clone();
        buf.extend_from_slice(&self.rtype.to_be_bytes());
        buf.extend_from_slice(&self.class.to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        let rdlength = self.rdlength.unwrap_or(self.rdata.len() as u16);
        buf.extend_from_slice(&rdlength.to_be_bytes());
        buf.extend_from_slice(&self.rdata);
        buf
    }
}

/// Assembles a response message: header, echoed question, then sections.
pub struct ResponseBuilder {
    header: Header,
    question: Vec<u8>,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(id: u16, name: &str, qtype: QueryType) -> Self {
        Self {
            header: Header {
                id,
                qr: true,
                rd: true,
                qdcount: 1,
                ..Header::default()
            },
            question: Question::new(name, qtype).encode().unwrap(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn question_len(&self) -> usize {
        self.question.len()
    }

    pub fn authoritative(mut self, aa: bool) -> Self {
        self.header.aa = aa;
        self
    }

    pub fn recursion_available(mut self, ra: bool) -> Self {
        self.header.ra = ra;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.header.rcode = rcode;
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

    /// Offset at which the first answer record will start.
    pub fn answers_offset(&self) -> usize {
        12 + self.question.len()
    }

    pub fn build(&self) -> Vec<u8> {
        let mut header = self.header;
        header.ancount = self.answers.len() as u16;
        header.nscount = self.authorities.len() as u16;
        header.arcount = self.additionals.len() as u16;

        let mut buf = header.encode().to_vec();
        buf.extend_from_slice(&self.question);
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

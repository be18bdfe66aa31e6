use crate::errors::DomainError;

/// Bounds-checked big-endian cursor over a received message.
///
/// Every read either returns the requested bytes and advances, or fails with
/// [`DomainError::OutOfBounds`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Moves the cursor forward to `pos`. Moving backwards is rejected.
    pub fn seek(&mut self, pos: usize) -> Result<(), DomainError> {
        if pos < self.pos {
            return Err(DomainError::MalformedMessage(format!(
                "cursor moved backwards from {} to {}",
                self.pos, pos
            )));
        }
        if pos > self.buf.len() {
            return Err(self.out_of_bounds(pos - self.pos));
        }
        self.pos = pos;
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DomainError> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn peek_u8(&self) -> Result<u8, DomainError> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.out_of_bounds(1))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| self.out_of_bounds(n))?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, DomainError> {
        let b = self.read_bytes(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn out_of_bounds(&self, needed: usize) -> DomainError {
        DomainError::OutOfBounds {
            offset: self.pos,
            needed,
            len: self.buf.len(),
        }
    }
}

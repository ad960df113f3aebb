use bytes::{Buf, Bytes};

use crate::error::{EntryError, Result};

/// Forward-only read cursor over a complete, immutable buffer.
///
/// All integers are big-endian. A read that needs more bytes than remain
/// fails with [`EntryError::EndOfMessage`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct ByteCursor {
    buf: Bytes,
    pos: usize,
}

impl ByteCursor {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The unread bytes, without advancing.
    pub fn peek_remaining(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// The whole underlying buffer.
    pub fn get_ref(&self) -> &Bytes {
        &self.buf
    }

    /// Consume the cursor and return the underlying buffer.
    pub fn into_inner(self) -> Bytes {
        self.buf
    }

    /// Move back to an earlier position. Used to undo a failed multi-step read.
    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    fn take(&mut self, n: usize) -> Result<&[u8]> {
        if n > self.remaining() {
            return Err(EntryError::EndOfMessage);
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let mut raw = self.take(2)?;
        Ok(raw.get_u16())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let mut raw = self.take(4)?;
        Ok(raw.get_u32())
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let mut raw = self.take(8)?;
        Ok(raw.get_u64())
    }

    /// Read a big-endian `u16` without advancing.
    pub fn peek_u16(&self) -> Result<u16> {
        let mut raw = self
            .peek_remaining()
            .get(..2)
            .ok_or(EntryError::EndOfMessage)?;
        Ok(raw.get_u16())
    }

    /// Read `n` bytes as a view into the buffer (no copy).
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        if n > self.remaining() {
            return Err(EntryError::EndOfMessage);
        }
        let slice = self.buf.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(slice)
    }

    /// Read a 4-byte length followed by that many bytes.
    ///
    /// Either both parts are consumed or neither is.
    pub fn read_length_prefixed(&mut self) -> Result<Bytes> {
        let start = self.pos;
        let len = self.read_u32()? as usize;
        self.read_bytes(len).inspect_err(|_| self.rewind(start))
    }

    /// Consume everything that is left.
    pub fn read_remaining(&mut self) -> Bytes {
        let slice = self.buf.slice(self.pos..);
        self.pos = self.buf.len();
        slice
    }
}

/// Forward-only byte cursor over a buffered source

use crate::error::{FsdError, Result};
use std::io::{BufRead, ErrorKind};

/// Sequential reader that tracks how many bytes have been consumed
///
/// There is no seeking: every read moves strictly forward. Running out of
/// bytes in the middle of a read is reported as
/// [`FsdError::UnexpectedEndOfInput`] with the offset where the source ended.
#[derive(Debug)]
pub struct ByteCursor<R> {
    source: R,
    position: u64,
}

impl<R: BufRead> ByteCursor<R> {
    /// Create a new cursor at the start of the source
    pub fn new(source: R) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read a single byte
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.fill(&mut byte)?;
        Ok(byte[0])
    }

    /// Read exactly `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut data = vec![0u8; len];
        self.fill(&mut data)?;
        Ok(data)
    }

    /// Read exactly `N` bytes into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut data = [0u8; N];
        self.fill(&mut data)?;
        Ok(data)
    }

    /// Read a null-terminated string
    ///
    /// Every byte before the terminator is kept, printable or not, mapped to
    /// the char with the same code point. The terminator is consumed.
    pub fn read_cstring(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.read_byte() {
                Ok(0) => return Ok(text),
                Ok(byte) => text.push(char::from(byte)),
                // The terminator is still missing
                Err(FsdError::UnexpectedEndOfInput { offset, .. }) => {
                    return Err(FsdError::eof(offset, 1))
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Check if the source has no more bytes
    pub fn is_exhausted(&mut self) -> Result<bool> {
        loop {
            match self.source.fill_buf() {
                Ok(buf) => return Ok(buf.is_empty()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Give back the underlying source
    pub fn into_inner(self) -> R {
        self.source
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(FsdError::eof(self.position, buf.len() - filled));
                }
                Ok(n) => {
                    filled += n;
                    self.position += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

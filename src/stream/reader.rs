use std::io::{ErrorKind, Read, Result};

use byteorder::ReadBytesExt;

use crate::stream::BitRead;

/// Reads bits MSB-first from an underlying byte stream.
///
/// Bytes are pulled one at a time as bits are needed, so nothing past the
/// current byte is consumed from the inner reader. Wrap unbuffered sources
/// in a `std::io::BufReader`.
#[derive(Debug)]
pub struct BitReader<R> {
    inner: R,
    current: u8,
    // Bits of `current` not yet handed out.
    remaining: u8,
    bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Creates a bit reader over `inner`.
    pub fn new(inner: R) -> Self {
        BitReader {
            inner,
            current: 0,
            remaining: 0,
            bits_read: 0,
        }
    }

    /// The number of bits handed out so far.
    #[inline]
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// Gives access to the underlying reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the underlying reader. Unread bits of a partially consumed
    /// byte are discarded.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> BitRead for BitReader<R> {
    fn read_bit(&mut self) -> Result<Option<bool>> {
        if self.remaining == 0 {
            match self.inner.read_u8() {
                Ok(byte) => {
                    self.current = byte;
                    self.remaining = 8;
                }
                Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            }
        }

        self.remaining -= 1;
        self.bits_read += 1;
        Ok(Some((self.current >> self.remaining) & 1 == 1))
    }
}

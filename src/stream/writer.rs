use std::io::{Result, Write};

use byteorder::WriteBytesExt;

use crate::stream::BitWrite;

/// Writes bits MSB-first to an underlying byte stream.
///
/// Complete bytes go to the inner writer as soon as they fill up. The
/// last, partial byte stays buffered until
/// [`flush_with_padding`](#method.flush_with_padding), which completes it
/// with zero bits.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    // MSB-aligned partial byte.
    buffer: u8,
    // Bits used in `buffer`, always below 8.
    pending: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Creates a bit writer over `inner`.
    pub fn new(inner: W) -> Self {
        BitWriter {
            inner,
            buffer: 0,
            pending: 0,
            bits_written: 0,
        }
    }

    /// The number of bits written so far, not counting padding.
    #[inline]
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    /// Gives access to the underlying writer.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns the underlying writer.
    ///
    /// Any bits still buffered are lost; call `flush_with_padding` first.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> BitWrite for BitWriter<W> {
    fn write_bit(&mut self, value: bool) -> Result<()> {
        if value {
            self.buffer |= 0x80 >> self.pending;
        }
        self.pending += 1;
        self.bits_written += 1;

        if self.pending == 8 {
            self.inner.write_u8(self.buffer)?;
            self.buffer = 0;
            self.pending = 0;
        }

        Ok(())
    }

    /// Pads the current partial byte with 0s, writes it out, and flushes
    /// the underlying writer.
    ///
    /// Adds nothing to the byte stream when already on a byte boundary.
    fn flush_with_padding(&mut self) -> Result<()> {
        if self.pending > 0 {
            self.inner.write_u8(self.buffer)?;
            self.buffer = 0;
            self.pending = 0;
        }
        self.inner.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stream::{BitRead, BitReader};

    #[test]
    fn writer() {
        let mut writer = BitWriter::new(Vec::<u8>::new());
        for &bit in &[true, false, true, true, false, false, true, false] {
            writer.write_bit(bit).unwrap();
        }
        assert_eq!(&[0b1011_0010u8][..], &writer.get_ref()[..]);
        assert_eq!(8, writer.bits_written());
    }

    #[test]
    fn padding() {
        let mut writer = BitWriter::new(Vec::<u8>::new());
        writer.write_int(5, 0b10111u8).unwrap();
        assert!(writer.get_ref().is_empty());

        writer.flush_with_padding().unwrap();
        assert_eq!(vec![0b1011_1000u8], writer.into_inner());
    }

    #[test]
    fn flush_on_boundary_adds_nothing() {
        let mut writer = BitWriter::new(Vec::<u8>::new());
        writer.write_int(16, 0xBEEFu16).unwrap();
        writer.flush_with_padding().unwrap();
        writer.flush_with_padding().unwrap();
        assert_eq!(vec![0xBE, 0xEF], writer.into_inner());
    }

    #[test]
    fn empty_flush() {
        let mut writer = BitWriter::new(Vec::<u8>::new());
        writer.flush_with_padding().unwrap();
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn read_back() {
        let mut writer = BitWriter::new(Vec::<u8>::new());
        writer.write_int(9, 256u16).unwrap();
        writer.write_int(3, 0b011u8).unwrap();
        writer.write_bit(true).unwrap();
        writer.flush_with_padding().unwrap();
        let bytes = writer.into_inner();
        assert_eq!(2, bytes.len());

        let mut reader = BitReader::new(&bytes[..]);
        assert_eq!(Some(256u16), reader.read_int(9).unwrap());
        assert_eq!(Some(0b011u8), reader.read_int(3).unwrap());
        assert_eq!(Some(true), reader.read_bit().unwrap());
        assert_eq!(Some(0u8), reader.read_int(3).unwrap());
        assert_eq!(None, reader.read_bit().unwrap());
    }
}

//! The coding alphabet: every byte value plus an end-of-stream marker.

use std::fmt;

/// Number of distinct symbols: 256 bytes and `EndOfStream`.
pub const ALPHABET_SIZE: usize = 257;

/// Width of a symbol index on the wire.
pub const SYMBOL_BITS: usize = 9;

/// A decoded unit: a byte, or the in-band terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A literal byte.
    Byte(u8),
    /// Marks the end of the logical byte stream.
    EndOfStream,
}

impl Symbol {
    /// The symbol's index: the byte value for bytes, 256 for `EndOfStream`.
    #[inline]
    pub fn index(self) -> u16 {
        match self {
            Symbol::Byte(byte) => byte as u16,
            Symbol::EndOfStream => 256,
        }
    }

    /// Inverse of [`index`](#method.index); `None` above 256.
    #[inline]
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            0 ..= 255 => Some(Symbol::Byte(index as u8)),
            256 => Some(Symbol::EndOfStream),
            _ => None,
        }
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Symbol::Byte(byte)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Symbol::Byte(byte) if byte.is_ascii_graphic() => {
                write!(f, "'{}'", byte as char)
            }
            Symbol::Byte(byte) => write!(f, "{:#04x}", byte),
            Symbol::EndOfStream => f.write_str("EOS"),
        }
    }
}

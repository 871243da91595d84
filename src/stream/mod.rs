//! Bit-oriented streams for coding.
//!
//! All streams here are MSB-first: the first bit read from or written to a
//! byte is its most significant bit.

mod traits;
pub use self::traits::*;

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;

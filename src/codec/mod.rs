//! Encoding and decoding with a code tree.
//!
//! The [`Encoder`](struct.Encoder.html) writes one code per byte followed
//! by the code for `Symbol::EndOfStream`, then pads to a byte boundary.
//! The [`Decoder`](struct.Decoder.html) walks the tree one bit at a time
//! and stops at the end-of-stream leaf, so no length prefix is needed.

mod table;
pub use self::table::*;

mod encoder;
pub use self::encoder::*;

mod decoder;
pub use self::decoder::*;

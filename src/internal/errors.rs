use std::io;

use crate::errors::{Error, Result};

pub fn out_of_bits<A>(who: &str) -> io::Result<A> {
    Err(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("{}: could not decode: more bits expected", who),
    ))
}

pub fn too_many_bits<A>(who: &str, nbits: usize) -> io::Result<A> {
    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{}: {} bits do not fit the requested type", who, nbits),
    ))
}

pub fn malformed<A>(who: &str, reason: &str) -> Result<A> {
    Err(Error::MalformedTree(format!("{}: {}", who, reason)))
}

pub fn truncated<A>(bits_read: u64) -> Result<A> {
    Err(Error::TruncatedStream { bits_read })
}

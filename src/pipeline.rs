//! Whole-stream compression and decompression.
//!
//! A compressed container is the serialized code tree, then one code per
//! input byte, then the end-of-stream code, then 0s up to a byte boundary.
//! There is no magic number, length field or checksum.

use std::io::{BufReader, BufWriter, Read, Write};

use crate::codec::{Decoder, Encoder};
use crate::errors::{Error, Result};
use crate::internal::errors::truncated;
use crate::stream::{BitReader, BitWriter};
use crate::tree::{read_tree, write_tree, CodeTree};

/// Byte counts for one compression or decompression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Bytes consumed from the input.
    pub input_bytes: u64,
    /// Bytes written to the output.
    pub output_bytes: u64,
}

/// Compresses all of `input` into `output` using `tree`.
///
/// The tree is validated and every input byte is checked against it
/// before the first byte is written, so on `MalformedTree` or
/// `UnknownSymbol` the output is left untouched.
pub fn compress<R, W>(tree: &CodeTree, mut input: R, output: W) -> Result<Summary>
    where R: Read, W: Write
{
    let encoder = Encoder::new(tree)?;

    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    encoder.check(&data)?;

    let mut writer = BitWriter::new(BufWriter::new(output));
    write_tree(tree, &mut writer)?;
    log::trace!("tree header: {} bits", writer.bits_written());

    encoder.encode_bytes(&data, &mut writer)?;

    let summary = Summary {
        input_bytes: data.len() as u64,
        output_bytes: (writer.bits_written() + 7) / 8,
    };
    log::debug!("compressed {} bytes into {}", summary.input_bytes, summary.output_bytes);
    Ok(summary)
}

/// Decompresses a container from `input` into `output`.
///
/// A header that cannot be read is `MalformedTree`, and nothing is
/// written. After that, bytes are written as they are decoded, so a
/// `TruncatedStream` failure may leave partial output behind; its
/// `bits_read` is the position in the whole container, header included,
/// where the bits ran out. A header whose tree has no `EndOfStream` leaf
/// is `MalformedTree`, and nothing is written. Bytes after the padding are
/// not inspected.
pub fn decompress<R, W>(input: R, output: W) -> Result<Summary>
    where R: Read, W: Write
{
    let mut reader = BitReader::new(BufReader::new(input));
    let tree = read_tree(&mut reader)?;
    log::trace!("tree header: {} bits, {} leaves", reader.bits_read(), tree.leaf_count());

    let decoder = Decoder::new(tree);

    let mut output = BufWriter::new(output);
    let written = match decoder.decode(&mut reader, &mut output) {
        Err(Error::TruncatedStream { .. }) => return truncated(reader.bits_read()),
        result => result?,
    };
    output.flush()?;

    let summary = Summary {
        input_bytes: (reader.bits_read() + 7) / 8,
        output_bytes: written,
    };
    log::debug!("decompressed {} bytes into {}", summary.input_bytes, summary.output_bytes);
    Ok(summary)
}

/// Compresses `data` into a new buffer.
pub fn compress_to_vec(tree: &CodeTree, data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress(tree, data, &mut out)?;
    Ok(out)
}

/// Decompresses a container held in memory.
pub fn decompress_to_vec(container: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decompress(container, &mut out)?;
    Ok(out)
}

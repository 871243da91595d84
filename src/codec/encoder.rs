use std::io::Read;

use crate::codec::EncodingTable;
use crate::errors::{Error, Result};
use crate::internal::errors::*;
use crate::stream::BitWrite;
use crate::symbol::Symbol;
use crate::tree::CodeTree;

/// Turns bytes into prefix codes, terminated by the end-of-stream code.
#[derive(Clone, Debug)]
pub struct Encoder {
    table: EncodingTable,
}

impl Encoder {
    /// Builds the encoding table for `tree`.
    ///
    /// Fails with `MalformedTree` if the table cannot be built or if the
    /// tree has no `EndOfStream` leaf to terminate the stream with.
    pub fn new(tree: &CodeTree) -> Result<Self> {
        let table = EncodingTable::new(tree)?;
        if !table.contains(Symbol::EndOfStream) {
            return malformed("Encoder::new", "tree has no end-of-stream leaf");
        }
        log::trace!("encoding table covers {} symbols", table.len());
        Ok(Encoder { table })
    }

    /// The table this encoder looks codes up in.
    #[inline]
    pub fn table(&self) -> &EncodingTable {
        &self.table
    }

    /// Checks that every byte of `data` has a code.
    ///
    /// Fails with `UnknownSymbol` naming the first byte that does not.
    pub fn check(&self, data: &[u8]) -> Result<()> {
        match data.iter().find(|&&byte| !self.table.contains(Symbol::Byte(byte))) {
            Some(&byte) => Err(Error::UnknownSymbol(byte)),
            None => Ok(()),
        }
    }

    /// Reads all of `input` and encodes it to `sink`; see
    /// [`encode_bytes`](#method.encode_bytes). Returns the number of
    /// input bytes.
    pub fn encode<R: Read, W: BitWrite>(&self, mut input: R, sink: &mut W) -> Result<u64> {
        let mut data = Vec::new();
        input.read_to_end(&mut data)?;
        self.encode_bytes(&data, sink)?;
        Ok(data.len() as u64)
    }

    /// Writes the code of each byte of `data`, then the end-of-stream
    /// code, then pads `sink` to a byte boundary and flushes it.
    ///
    /// Nothing is written if some byte has no code.
    pub fn encode_bytes<W: BitWrite>(&self, data: &[u8], sink: &mut W) -> Result<()> {
        self.check(data)?;

        for &byte in data {
            self.write_symbol(Symbol::Byte(byte), sink)?;
        }
        self.write_symbol(Symbol::EndOfStream, sink)?;

        sink.flush_with_padding()?;
        Ok(())
    }

    fn write_symbol<W: BitWrite>(&self, symbol: Symbol, sink: &mut W) -> Result<()> {
        let code = match (self.table.get(symbol), symbol) {
            (Some(code), _) => code,
            (None, Symbol::Byte(byte)) => return Err(Error::UnknownSymbol(byte)),
            (None, Symbol::EndOfStream) => {
                return malformed("Encoder", "tree has no end-of-stream leaf");
            }
        };

        for &bit in code {
            sink.write_bit(bit)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use super::*;
    use crate::stream::BitWriter;
    use crate::test_helpers::{abe_tree, bits};

    #[test]
    fn aab() {
        let encoder = Encoder::new(&abe_tree()).unwrap();
        let mut dv = VecDeque::<bool>::new();
        encoder.encode_bytes(b"aab", &mut dv).unwrap();

        assert_eq!(bits("001011"), dv.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn aab_padded() {
        let encoder = Encoder::new(&abe_tree()).unwrap();
        let mut writer = BitWriter::new(Vec::<u8>::new());
        assert_eq!(3, encoder.encode(&b"aab"[..], &mut writer).unwrap());

        assert_eq!(vec![0b0010_1100], writer.into_inner());
    }

    #[test]
    fn empty_input_is_just_end_of_stream() {
        let encoder = Encoder::new(&abe_tree()).unwrap();
        let mut dv = VecDeque::<bool>::new();
        encoder.encode_bytes(b"", &mut dv).unwrap();

        assert_eq!(bits("11"), dv.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn unknown_symbol_writes_nothing() {
        let encoder = Encoder::new(&abe_tree()).unwrap();
        let mut writer = BitWriter::new(Vec::<u8>::new());

        match encoder.encode_bytes(b"abacus", &mut writer) {
            Err(Error::UnknownSymbol(b'c')) => (),
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
        assert_eq!(0, writer.bits_written());
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn requires_end_of_stream() {
        for tree in &[CodeTree::leaf(b'x'),
                      CodeTree::internal(CodeTree::leaf(b'x'), CodeTree::leaf(b'y'))] {
            match Encoder::new(tree) {
                Err(Error::MalformedTree(_)) => (),
                other => panic!("expected MalformedTree, got {:?}", other),
            }
        }
    }

    #[test]
    fn deterministic() {
        let encoder = Encoder::new(&abe_tree()).unwrap();
        let mut first = VecDeque::<bool>::new();
        let mut second = VecDeque::<bool>::new();
        encoder.encode_bytes(b"babbaab", &mut first).unwrap();
        encoder.encode_bytes(b"babbaab", &mut second).unwrap();
        assert_eq!(first, second);
    }
}

use std::collections::VecDeque;
use std::io::Result;
use std::mem;

use num_traits::PrimInt;

use crate::internal::errors::*;

/// Allows reading bits from a source.
pub trait BitRead {
    /// Reads a single bit from the source.
    ///
    /// `Ok(None)` indicates (benign) EOF.
    fn read_bit(&mut self) -> Result<Option<bool>>;

    /// Reads an unsigned integer of `nbits`, most significant bit first.
    ///
    /// `Ok(None)` means the source was already exhausted. Running out
    /// after the first bit of the group is an `UnexpectedEof` error.
    fn read_int<N: PrimInt>(&mut self, nbits: usize) -> Result<Option<N>> {
        if nbits > 8 * mem::size_of::<N>() {
            return too_many_bits("BitRead::read_int", nbits);
        }

        let mut result = N::zero();

        for i in 0 .. nbits {
            match self.read_bit()? {
                Some(bit) => {
                    result = result << 1;
                    if bit { result = result | N::one(); }
                }
                None if i == 0 => return Ok(None),
                None => return out_of_bits("BitRead::read_int"),
            }
        }

        Ok(Some(result))
    }
}

/// Allows writing bits to a sink.
pub trait BitWrite {
    /// Writes a single bit to the sink.
    fn write_bit(&mut self, value: bool) -> Result<()>;

    /// Writes the low `nbits` of `value`, most significant bit first.
    fn write_int<N: PrimInt>(&mut self, nbits: usize, value: N) -> Result<()> {
        if nbits > 8 * mem::size_of::<N>() {
            return too_many_bits("BitWrite::write_int", nbits);
        }

        for i in (0 .. nbits).rev() {
            self.write_bit((value >> i) & N::one() != N::zero())?;
        }

        Ok(())
    }

    /// Completes any partial byte with 0s and flushes the sink.
    ///
    /// Sinks that store bits rather than bytes have nothing to pad.
    fn flush_with_padding(&mut self) -> Result<()> {
        Ok(())
    }
}

impl BitRead for VecDeque<bool> {
    fn read_bit(&mut self) -> Result<Option<bool>> {
        Ok(self.pop_front())
    }
}

impl BitWrite for VecDeque<bool> {
    fn write_bit(&mut self, value: bool) -> Result<()> {
        self.push_back(value);
        Ok(())
    }
}

impl<'a, R: BitRead + ?Sized> BitRead for &'a mut R {
    fn read_bit(&mut self) -> Result<Option<bool>> {
        (**self).read_bit()
    }
}

impl<'a, W: BitWrite + ?Sized> BitWrite for &'a mut W {
    fn write_bit(&mut self, value: bool) -> Result<()> {
        (**self).write_bit(value)
    }

    fn flush_with_padding(&mut self) -> Result<()> {
        (**self).flush_with_padding()
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;
    use std::io::ErrorKind;

    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn int_is_msb_first() {
        let mut dv = VecDeque::<bool>::new();
        dv.write_int(9, 0b1_0000_0011u16).unwrap();

        let bits: Vec<bool> = dv.iter().cloned().collect();
        assert_eq!(vec![true, false, false, false, false, false, false, true, true],
                   bits);

        assert_eq!(Some(0b1_0000_0011u16), dv.read_int(9).unwrap());
        assert_eq!(None, dv.read_int::<u16>(9).unwrap());
    }

    #[test]
    fn short_int() {
        let mut dv = VecDeque::<bool>::new();
        dv.write_int(3, 5u8).unwrap();

        let err = dv.read_int::<u8>(4).unwrap_err();
        assert_eq!(ErrorKind::UnexpectedEof, err.kind());
    }

    #[test]
    fn zero_width() {
        let mut dv = VecDeque::<bool>::new();
        dv.write_int(0, 0xFFu8).unwrap();
        assert!(dv.is_empty());
        assert_eq!(Some(0u8), dv.read_int(0).unwrap());
    }

    #[test]
    fn too_wide() {
        let mut dv = VecDeque::<bool>::new();
        assert_eq!(ErrorKind::InvalidInput,
                   dv.write_int(9, 0u8).unwrap_err().kind());
        assert_eq!(ErrorKind::InvalidInput,
                   dv.read_int::<u8>(9).unwrap_err().kind());
    }

    #[quickcheck]
    fn qc_int_round_trip(values: Vec<u32>, width: u8) {
        let nbits = (width % 32) as usize + 1;
        let mask = if nbits == 32 { !0 } else { (1u32 << nbits) - 1 };

        let mut dv = VecDeque::<bool>::new();
        for &value in &values {
            dv.write_int(nbits, value).unwrap();
        }

        for &value in &values {
            assert_eq!(Some(value & mask), dv.read_int(nbits).unwrap());
        }
        assert_eq!(None, dv.read_int::<u32>(nbits).unwrap());
    }
}

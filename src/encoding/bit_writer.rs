use crate::io::{Error, Write};

/// Writes individual bits, bytes and fixed width integers into a [Write].
///
/// Bits fill each byte starting at the most significant position. A partially
/// filled byte is held back until it is complete or the writer is flushed, at which
/// point the unused low bits are written as zeros.
pub struct BitWriter<W: Write> {
    sink: W,
    /// Bits waiting to be written, aligned to the most significant position
    pending: u8,
    /// Number of valid bits in `pending`
    pending_bits: u8,
    /// Total number of bits written through this writer, padding excluded
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            pending: 0,
            pending_bits: 0,
            bits_written: 0,
        }
    }

    /// Number of bits written so far, not counting padding added by [BitWriter::flush]
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.pending_bits == 0
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<(), Error> {
        if bit {
            self.pending |= 0x80 >> self.pending_bits;
        }
        self.pending_bits += 1;
        self.bits_written += 1;
        if self.pending_bits == 8 {
            let byte = self.pending;
            self.pending = 0;
            self.pending_bits = 0;
            self.sink.write_all(&[byte])?;
        }
        Ok(())
    }

    pub fn write_bits(&mut self, bits: &[bool]) -> Result<(), Error> {
        for &bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Write the lowest `num_bits` bits of `value`, most significant of those first
    pub fn write_value(&mut self, value: u64, num_bits: u32) -> Result<(), Error> {
        assert!(num_bits <= 64);
        for shift in (0..num_bits).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        if self.is_byte_aligned() {
            self.sink.write_all(&[byte])?;
            self.bits_written += 8;
            Ok(())
        } else {
            self.write_value(u64::from(byte), 8)
        }
    }

    /// Write `value` as four little endian bytes
    pub fn write_u32(&mut self, value: u32) -> Result<(), Error> {
        for byte in value.to_le_bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Pad the current byte with zeros, write it out and flush the sink
    pub fn flush(&mut self) -> Result<(), Error> {
        if !self.is_byte_aligned() {
            let byte = self.pending;
            self.pending = 0;
            self.pending_bits = 0;
            self.sink.write_all(&[byte])?;
        }
        self.sink.flush()
    }

    /// Flush and return the sink
    pub fn finish(mut self) -> Result<W, Error> {
        self.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::BitWriter;
    use alloc::vec;
    use alloc::vec::Vec;

    fn bits(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn single_byte_written_4_4() {
        let mut bw = BitWriter::new(Vec::new());
        bw.write_bits(&bits("1111")).unwrap();
        bw.write_bits(&bits("0000")).unwrap();
        assert_eq!(bw.bits_written(), 8);
        assert_eq!(bw.finish().unwrap(), vec![0b1111_0000]);
    }

    #[test]
    fn single_byte_written_1_7() {
        let mut bw = BitWriter::new(Vec::new());
        bw.write_bit(true).unwrap();
        bw.write_value(0, 7).unwrap();
        assert_eq!(bw.finish().unwrap(), vec![0b1000_0000]);
    }

    #[test]
    fn partial_byte_is_zero_padded() {
        let mut bw = BitWriter::new(Vec::new());
        bw.write_bits(&bits("101")).unwrap();
        assert!(!bw.is_byte_aligned());
        assert_eq!(bw.bits_written(), 3);
        assert_eq!(bw.finish().unwrap(), vec![0b1010_0000]);
    }

    #[test]
    fn multi_byte_boundary_crossed_4_5_7() {
        let mut bw = BitWriter::new(Vec::new());
        bw.write_value(0b1111, 4).unwrap();
        bw.write_value(0, 5).unwrap();
        bw.write_value(0b111_1111, 7).unwrap();
        assert_eq!(bw.finish().unwrap(), vec![0b1111_0000, 0b0111_1111]);
    }

    #[test]
    fn unaligned_byte_straddles() {
        let mut bw = BitWriter::new(Vec::new());
        bw.write_bit(true).unwrap();
        bw.write_byte(0xff).unwrap();
        assert_eq!(bw.bits_written(), 9);
        assert_eq!(bw.finish().unwrap(), vec![0xff, 0b1000_0000]);
    }

    #[test]
    fn u32_is_little_endian() {
        let mut bw = BitWriter::new(Vec::new());
        bw.write_u32(0x0403_0201).unwrap();
        assert_eq!(bw.finish().unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn nothing_written_gives_nothing() {
        let bw = BitWriter::new(Vec::new());
        assert!(bw.finish().unwrap().is_empty());
    }
}

//! Whole input compression.
//!
//! The input is read twice, once to count the symbols and once to encode them, so it has to be
//! available as a whole.

use super::bit_writer::BitWriter;
use super::encoder::HuffmanEncoder;
use super::errors::{CompressError, EncodeError};
use super::frequency::FrequencyTable;
use crate::header::write_header;
use crate::io::{ErrorKind, Read, Write};
use crate::tree::HuffmanTree;
use alloc::vec::Vec;

/// What a call to [compress] produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionSummary {
    pub input_bytes: u64,
    pub distinct_symbols: usize,
    /// Bit count field and tree
    pub header_bits: u64,
    pub payload_bits: u64,
    /// Everything written to the sink, padding included
    pub output_bytes: u64,
}

impl CompressionSummary {
    /// Output size relative to the input size, `0.0` for an empty input
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Compress `source` into `sink`.
///
/// An empty source produces no output at all, not even a header.
pub fn compress<W: Write>(source: &[u8], sink: W) -> Result<CompressionSummary, CompressError> {
    if source.is_empty() {
        vprintln!("Source is empty, nothing to compress");
        return Ok(CompressionSummary::default());
    }

    let frequencies = FrequencyTable::from_bytes(source);
    let mut tree = HuffmanTree::build(&frequencies);
    let mut writer = BitWriter::new(sink);

    let payload_bits = u64::from(write_header(&mut tree, &mut writer)?);
    let header_bits = writer.bits_written();

    HuffmanEncoder::new(&mut tree).encode_all(source, &mut writer)?;
    let written_bits = writer.bits_written();
    debug_assert_eq!(written_bits - header_bits, payload_bits);
    writer.finish().map_err(EncodeError::Io)?;

    Ok(CompressionSummary {
        input_bytes: source.len() as u64,
        distinct_symbols: frequencies.distinct_symbols(),
        header_bits,
        payload_bits,
        output_bytes: (written_bits + 7) / 8,
    })
}

/// Compress `source` into a new buffer
pub fn compress_to_vec(source: &[u8]) -> Result<Vec<u8>, CompressError> {
    let mut output = Vec::new();
    compress(source, &mut output)?;
    Ok(output)
}

/// Read all of `source` and compress it into `sink`
pub fn compress_reader<R: Read, W: Write>(
    mut source: R,
    sink: W,
) -> Result<CompressionSummary, CompressError> {
    let mut input = Vec::new();
    let mut chunk = [0u8; 8 * 1024];
    loop {
        match source.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => input.extend_from_slice(&chunk[..n]),
            Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(CompressError::ReadInput(e)),
        }
    }
    compress(&input, sink)
}

#[cfg(test)]
mod tests {
    use super::{compress, compress_reader, compress_to_vec};
    use crate::decoding::decompressor::decompress_to_vec;
    use alloc::vec::Vec;

    #[test]
    fn empty_input_gives_empty_output() {
        let mut output = Vec::new();
        let summary = compress(&[], &mut output).unwrap();
        assert!(output.is_empty());
        assert_eq!(summary.output_bytes, 0);
        assert_eq!(summary.ratio(), 0.0);
    }

    #[test]
    fn aaab_summary() {
        let mut output = Vec::new();
        let summary = compress(b"aaab", &mut output).unwrap();
        assert_eq!(summary.input_bytes, 4);
        assert_eq!(summary.distinct_symbols, 2);
        assert_eq!(summary.payload_bits, 4);
        // 32 bit count, 1 internal node, 2 leaves
        assert_eq!(summary.header_bits, 32 + 1 + 2 * 9);
        assert_eq!(summary.output_bytes, output.len() as u64);
        assert_eq!(output.len(), 7);
    }

    #[test]
    fn header_bit_count_matches_payload() {
        let input = b"How much wood would a woodchuck chuck if a woodchuck could chuck wood?";
        let mut output = Vec::new();
        let summary = compress(input, &mut output).unwrap();
        let declared = u32::from_le_bytes([output[0], output[1], output[2], output[3]]);
        assert_eq!(u64::from(declared), summary.payload_bits);
        let total_bits = summary.header_bits + summary.payload_bits;
        assert_eq!(output.len() as u64, (total_bits + 7) / 8);
    }

    #[test]
    fn reader_and_slice_agree() {
        let input: &[u8] = b"the same bytes through two entry points";
        let mut from_reader = Vec::new();
        compress_reader(input, &mut from_reader).unwrap();
        assert_eq!(from_reader, compress_to_vec(input).unwrap());
        assert_eq!(decompress_to_vec(&from_reader).unwrap(), input);
    }
}
